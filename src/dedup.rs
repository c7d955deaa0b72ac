//! Suppression of repeated fault notifications.

use std::collections::HashSet;

/// Remembers which fault texts were already forwarded during this run.
///
/// Owned by the scheduler; nothing here is global.  A cycle that delivers
/// at least one status notification resets the guard, so a fault that
/// reappears after a healthy period is reported again.
#[derive(Debug, Default)]
pub struct DedupGuard {
    seen: HashSet<String>,
}

impl DedupGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` has not been forwarded yet.  Does not mutate.
    pub fn should_notify(&self, text: &str) -> bool {
        !self.seen.contains(text)
    }

    /// Record that `text` has been forwarded.
    pub fn remember(&mut self, text: impl Into<String>) {
        self.seen.insert(text.into());
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}
