//! Error type for configuration store operations.

use std::path::PathBuf;
use std::time::Duration;

use launcher_core::KeyError;
use thiserror::Error;

/// Error type for configuration store operations.
///
/// Validation errors are raised before any I/O.  Lock timeouts and I/O
/// errors are raised by write paths only; read paths log them and degrade to
/// an empty result.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The key is empty, contains `=`, or otherwise cannot be written.
    #[error("invalid config key: {0}")]
    InvalidKey(#[from] KeyError),

    /// The value cannot be represented on a single data line.
    #[error("invalid value for config key `{key}`: {reason}")]
    InvalidValue { key: String, reason: &'static str },

    /// The file-access lock was not acquired within the configured timeout.
    #[error("failed to acquire the config file lock for {operation} within {timeout:?}")]
    LockTimeout {
        operation: &'static str,
        timeout: Duration,
    },

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The platform application-data directory could not be determined.
    #[error("could not determine platform application data directory")]
    NoPlatformDataDir,

    /// The store was disposed by its owner.
    #[error("config store has been disposed")]
    Disposed,
}

impl ConfigError {
    /// Returns `true` for errors caused by the caller's key or value.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidKey(_) | Self::InvalidValue { .. })
    }

    /// Returns `true` when the file-access lock timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::LockTimeout { .. })
    }
}
