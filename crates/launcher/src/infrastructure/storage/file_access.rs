//! The file-access lock.
//!
//! A single-permit semaphore serialises every read-for-miss, create, and
//! write of the config file.  Acquisition is bounded by a timeout so a
//! stalled holder cannot block callers forever.
//!
//! File I/O is only reachable through [`FileGuard`], which exists only while
//! the permit is held.  Closing the semaphore (on dispose) makes every later
//! acquisition fail with [`ConfigError::Disposed`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio::sync::{Semaphore, SemaphorePermit};

use super::error::ConfigError;

#[derive(Debug)]
pub(crate) struct FileAccess {
    permits: Semaphore,
    path: PathBuf,
    timeout: Duration,
}

impl FileAccess {
    pub(crate) fn new(path: PathBuf, timeout: Duration) -> Self {
        Self {
            permits: Semaphore::new(1),
            path,
            timeout,
        }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Waits up to the configured timeout for exclusive file access.
    ///
    /// `operation` names the caller in the timeout error.
    pub(crate) async fn lock(&self, operation: &'static str) -> Result<FileGuard<'_>, ConfigError> {
        match tokio::time::timeout(self.timeout, self.permits.acquire()).await {
            Ok(Ok(permit)) => Ok(FileGuard {
                _permit: permit,
                path: &self.path,
            }),
            Ok(Err(_closed)) => Err(ConfigError::Disposed),
            Err(_elapsed) => Err(ConfigError::LockTimeout {
                operation,
                timeout: self.timeout,
            }),
        }
    }

    /// Closes the semaphore.  Safe to call more than once.
    pub(crate) fn close(&self) {
        self.permits.close();
    }
}

/// Exclusive access to the config file.  Dropping it releases the lock.
#[derive(Debug)]
pub(crate) struct FileGuard<'a> {
    _permit: SemaphorePermit<'a>,
    path: &'a Path,
}

impl FileGuard<'_> {
    /// Reads the whole file; `Ok(None)` when it does not exist.
    pub(crate) async fn read(&self) -> Result<Option<String>, ConfigError> {
        match tokio::fs::read_to_string(self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Replaces the file content, creating the parent directory if needed.
    pub(crate) async fn write(&self, content: &str) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|source| ConfigError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(self.path, content)
            .await
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.to_path_buf(),
            source,
        }
    }
}
