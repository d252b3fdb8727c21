use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::ErrorKind;
use std::path::PathBuf;

/// String-keyed JSON store backed by one file per key under a profile
/// directory.
///
/// Failure policy mirrors browser local storage: a failed or malformed read
/// yields `None`, a failed write is logged and dropped. Callers never see a
/// store error on the happy path.
#[derive(Debug, Clone)]
pub struct KvStore {
    base: PathBuf,
}

impl KvStore {
    pub fn open(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        if let Err(e) = std::fs::create_dir_all(&base) {
            tracing::error!("failed to create profile dir {}: {e}", base.display());
        }
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }

    pub fn get_raw(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(content) if !content.trim().is_empty() => Some(content),
            Ok(_) => None,
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::error!("failed to read key '{key}': {e}");
                None
            }
        }
    }

    /// Typed read. Malformed JSON is treated the same as a missing key.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("failed to parse key '{key}': {e}");
                None
            }
        }
    }

    /// Replace the full value stored under `key`.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string_pretty(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize key '{key}': {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(self.key_path(key), json) {
            tracing::error!("failed to write key '{key}': {e}");
        }
    }

    pub fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::error!("failed to remove key '{key}': {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KvStore;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_and_remove() {
        let dir = tempdir().expect("tempdir");
        let store = KvStore::open(dir.path());

        store.set_json("numbers", &vec![1, 2, 3]);
        let loaded: Vec<i32> = store.get_json("numbers").expect("read back");
        assert_eq!(loaded, vec![1, 2, 3]);

        store.remove("numbers");
        assert!(store.get_json::<Vec<i32>>("numbers").is_none());
    }

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().expect("tempdir");
        let store = KvStore::open(dir.path());
        assert!(store.get_raw("absent").is_none());
        // removing a missing key is not an error either
        store.remove("absent");
    }

    #[test]
    fn malformed_json_degrades_to_none() {
        let dir = tempdir().expect("tempdir");
        let store = KvStore::open(dir.path());
        std::fs::write(dir.path().join("users.json"), "{not json").unwrap();
        assert!(store.get_json::<Vec<String>>("users").is_none());
    }
}
