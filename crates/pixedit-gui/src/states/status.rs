use std::time::{Duration, Instant};

use pixedit_core::consts::MAX_STATUS_TIMEOUT_SECS;
use pixedit_core::status::StatusMessage;

/// Status bar text with its expiry time.
#[derive(Default)]
pub struct StatusState {
    message: Option<(StatusMessage, Instant)>,
}

impl StatusState {
    pub fn show(&mut self, message: StatusMessage, now: Instant) {
        let expires = now
            .checked_add(message.timeout)
            .or_else(|| now.checked_add(Duration::from_secs(MAX_STATUS_TIMEOUT_SECS)))
            .unwrap_or(now);
        self.message = Some((message, expires));
    }

    /// The message to display, `None` once it has expired.
    pub fn current(&self, now: Instant) -> Option<&StatusMessage> {
        match &self.message {
            Some((message, expires)) if now < *expires => Some(message),
            _ => None,
        }
    }

    /// Time until the current message expires.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.message
            .as_ref()
            .and_then(|(_, expires)| expires.checked_duration_since(now))
            .filter(|d| !d.is_zero())
    }
}
