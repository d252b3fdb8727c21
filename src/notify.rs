use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
}

/// Transient error/success banner with auto-dismiss.
///
/// Showing a banner replaces whatever is visible and schedules a
/// fire-and-forget dismiss task. Tasks are never cancelled when a newer
/// banner arrives, so a stale task may hide a newer message. That quirk is
/// intentional and covered by tests; do not "fix" it by cancelling tasks.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Banner>,
    dismiss_at: Vec<Instant>,
    duration: Duration,
}

impl NotificationCenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            dismiss_at: Vec::new(),
            duration,
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>, now: Instant) {
        self.show(BannerKind::Error, message.into(), now);
    }

    pub fn show_success(&mut self, message: impl Into<String>, now: Instant) {
        self.show(BannerKind::Success, message.into(), now);
    }

    fn show(&mut self, kind: BannerKind, message: String, now: Instant) {
        self.current = Some(Banner { kind, message });
        self.dismiss_at.push(now + self.duration);
    }

    /// Hide the current banner. Scheduled dismiss tasks are left untouched.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Fire all due dismiss tasks. Each due task hides whatever banner is
    /// visible at that moment, matching the uncancelled-timer behavior.
    pub fn tick(&mut self, now: Instant) {
        let before = self.dismiss_at.len();
        self.dismiss_at.retain(|at| *at > now);
        if self.dismiss_at.len() < before {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Banner> {
        self.current.as_ref()
    }
}
