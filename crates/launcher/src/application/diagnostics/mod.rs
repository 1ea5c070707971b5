//! Diagnostic sink: the narrow logging boundary consumed by the config store.
//!
//! The store never logs through a global logger directly.  It is handed an
//! `Arc<dyn DiagnosticSink>` at construction and reports lifecycle events
//! through it:
//!
//! - `debug` – file created, file loaded, key appended or replaced.
//! - `error` – lock timeouts, I/O failures, rejected keys and values.
//!
//! Both methods are infallible.  A sink that fails internally must swallow
//! the failure; logging never changes the outcome of a store operation.

pub mod recording;

use std::error::Error;

use async_trait::async_trait;
use tracing::{debug, error};

pub use recording::RecordingSink;

/// An error attached to a diagnostic message.
pub type Cause<'a> = &'a (dyn Error + Send + Sync + 'static);

/// Receiver for store lifecycle events.
#[async_trait]
pub trait DiagnosticSink: Send + Sync {
    /// Records a debug-level message.
    async fn debug(&self, message: &str);

    /// Records an error-level message, optionally with the error that caused it.
    async fn error(&self, message: &str, cause: Option<Cause<'_>>);
}

/// Forwards diagnostics to the `tracing` subscriber installed by the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

#[async_trait]
impl DiagnosticSink for TracingSink {
    async fn debug(&self, message: &str) {
        debug!(target: "unix_launcher::config", "{message}");
    }

    async fn error(&self, message: &str, cause: Option<Cause<'_>>) {
        match cause {
            Some(cause) => error!(target: "unix_launcher::config", error = %cause, "{message}"),
            None => error!(target: "unix_launcher::config", "{message}"),
        }
    }
}
