use std::time::Duration;

use crate::error::PixeditError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// Outcome of the last action, as shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
    /// How long the status bar keeps the text.
    pub timeout: Duration,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>, timeout: Duration) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
            timeout,
        }
    }

    pub fn error(err: &PixeditError, timeout: Duration) -> Self {
        Self {
            text: err.to_string(),
            severity: Severity::Error,
            timeout,
        }
    }

    /// Errors also raise a modal dialog that must be dismissed.
    pub fn is_blocking(&self) -> bool {
        self.severity == Severity::Error
    }
}
