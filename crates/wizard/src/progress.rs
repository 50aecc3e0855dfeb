//! Cosmetic loading-message rotation (PRD-34).
//!
//! Long generation calls show a rotating status line so the screen does
//! not look frozen. The rotation is purely cosmetic and elapsed-time
//! driven; it has no connection to the request lifecycle and is not a
//! timeout mechanism.

use std::time::Duration;

/// Default rotation period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(4);

/// Messages shown while final content generation runs.
pub const GENERATION_MESSAGES: &[&str] = &[
    "Drafting your content...",
    "Polishing the wording...",
    "Applying your writing profile...",
    "Almost there...",
];

/// Elapsed-time-based message rotation over a fixed list.
#[derive(Debug, Clone)]
pub struct MessageRotator {
    messages: Vec<String>,
    period: Duration,
}

impl MessageRotator {
    /// Build a rotator over the given messages. An empty list falls back
    /// to a single generic message.
    pub fn new(messages: &[&str], period: Duration) -> Self {
        let messages = if messages.is_empty() {
            vec!["Working...".to_string()]
        } else {
            messages.iter().map(|m| m.to_string()).collect()
        };
        Self { messages, period }
    }

    /// The message to show after `elapsed` time, cycling through the list.
    pub fn message_at(&self, elapsed: Duration) -> &str {
        let tick = (elapsed.as_millis() / self.period.as_millis().max(1)) as usize;
        &self.messages[tick % self.messages.len()]
    }
}
