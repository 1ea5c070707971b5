//! Recording diagnostic sink for tests.
//!
//! Collects every message in memory so tests can assert on what the store
//! reported (for example, that a file was seeded exactly once).

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::{Cause, DiagnosticSink};

/// A [`DiagnosticSink`] that keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    debug: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All debug messages, in arrival order.
    pub fn debug_messages(&self) -> Vec<String> {
        self.debug
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// All error messages, in arrival order.  A cause is appended as `: <cause>`.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of debug messages containing `needle`.
    pub fn count_debug(&self, needle: &str) -> usize {
        self.debug_messages()
            .iter()
            .filter(|m| m.contains(needle))
            .count()
    }
}

#[async_trait]
impl DiagnosticSink for RecordingSink {
    async fn debug(&self, message: &str) {
        self.debug
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }

    async fn error(&self, message: &str, cause: Option<Cause<'_>>) {
        let entry = match cause {
            Some(cause) => format!("{message}: {cause}"),
            None => message.to_string(),
        };
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}
