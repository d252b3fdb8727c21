use crate::store::KvStore;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

pub const HISTORY_LIMIT: usize = 10;

/// Recent-activity categories shown on the processing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryCategory {
    Files,
    Patterns,
    Messages,
}

impl HistoryCategory {
    pub const ALL: [HistoryCategory; 3] = [
        HistoryCategory::Files,
        HistoryCategory::Patterns,
        HistoryCategory::Messages,
    ];

    pub fn store_key(self) -> &'static str {
        match self {
            HistoryCategory::Files => "history_files",
            HistoryCategory::Patterns => "history_patterns",
            HistoryCategory::Messages => "history_messages",
        }
    }

    /// Panel title on the processing page.
    pub fn title(self) -> &'static str {
        match self {
            HistoryCategory::Files => "Останні файли",
            HistoryCategory::Patterns => "Останні патерни",
            HistoryCategory::Messages => "Останні повідомлення",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub item: String,
    /// Locale-formatted display string, not a machine timestamp.
    pub timestamp: String,
}

/// Bounded newest-first recency list per category, persisted via the store.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    store: KvStore,
    limit: usize,
}

impl HistoryLog {
    pub fn new(store: KvStore, limit: usize) -> Self {
        Self { store, limit }
    }

    /// Prepend `item` to the category's list, evicting the oldest entries
    /// beyond the cap, and persist the full list.
    pub fn record(&self, category: HistoryCategory, item: impl Into<String>) {
        let mut entries: VecDeque<HistoryEntry> = self
            .store
            .get_json(category.store_key())
            .unwrap_or_default();
        entries.push_front(HistoryEntry {
            item: item.into(),
            timestamp: chrono::Local::now().format("%d.%m.%Y, %H:%M:%S").to_string(),
        });
        while entries.len() > self.limit {
            entries.pop_back();
        }
        self.store.set_json(category.store_key(), &entries);
    }

    /// Newest-first read of the stored entries.
    pub fn entries(&self, category: HistoryCategory) -> Vec<HistoryEntry> {
        self.store
            .get_json::<Vec<HistoryEntry>>(category.store_key())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{HistoryCategory, HistoryLog, HISTORY_LIMIT};
    use crate::store::KvStore;
    use tempfile::tempdir;

    #[test]
    fn record_caps_at_limit_and_keeps_newest_first() {
        let dir = tempdir().expect("tempdir");
        let log = HistoryLog::new(KvStore::open(dir.path()), HISTORY_LIMIT);

        for i in 0..11 {
            log.record(HistoryCategory::Files, format!("file-{i}"));
        }

        let entries = log.entries(HistoryCategory::Files);
        assert_eq!(entries.len(), HISTORY_LIMIT);
        assert_eq!(entries[0].item, "file-10");
        assert_eq!(entries.last().unwrap().item, "file-1");
        assert!(entries.iter().all(|e| e.item != "file-0"));
    }

    #[test]
    fn categories_are_independent() {
        let dir = tempdir().expect("tempdir");
        let log = HistoryLog::new(KvStore::open(dir.path()), HISTORY_LIMIT);

        log.record(HistoryCategory::Files, "cat.bmp");
        log.record(HistoryCategory::Patterns, "Сітка");

        assert_eq!(log.entries(HistoryCategory::Files).len(), 1);
        assert_eq!(log.entries(HistoryCategory::Patterns).len(), 1);
        assert!(log.entries(HistoryCategory::Messages).is_empty());
    }

    #[test]
    fn entries_survive_a_new_log_instance() {
        let dir = tempdir().expect("tempdir");
        {
            let log = HistoryLog::new(KvStore::open(dir.path()), HISTORY_LIMIT);
            log.record(HistoryCategory::Messages, "секрет");
        }
        let reopened = HistoryLog::new(KvStore::open(dir.path()), HISTORY_LIMIT);
        let entries = reopened.entries(HistoryCategory::Messages);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].item, "секрет");
    }
}
