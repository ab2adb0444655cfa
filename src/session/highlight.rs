//! Short-lived highlight of a repeated guess

use std::time::{Duration, Instant};

/// A repeated guess to highlight until a deadline.
///
/// Arming again replaces the previous highlight and restarts the clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHighlight {
    guess: String,
    expires_at: Instant,
}

impl DuplicateHighlight {
    pub fn new(guess: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            guess: guess.into(),
            expires_at: now + duration,
        }
    }

    /// The highlighted guess, unless the highlight has expired
    pub fn active(&self, now: Instant) -> Option<&str> {
        (now < self.expires_at).then_some(self.guess.as_str())
    }

    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }
}
