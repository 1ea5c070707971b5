//! Storage infrastructure: the launcher configuration file.
//!
//! - **`config_store`** – `ConfigStore`, the public get/set/try-get surface.
//! - **`cache`**        – the cache lock: a read/write lock over the in-memory
//!   key map.  Its API hands out owned values only, never a guard, and does no
//!   I/O.
//! - **`file_access`**  – the file-access lock: a single-permit semaphore with
//!   a timeout.  File I/O methods exist only on the `FileGuard` it returns.
//! - **`app_data`**     – platform application-data directory resolution.
//! - **`error`**        – `ConfigError`.
//!
//! The two locks are never nested in a way that matters: cache critical
//! sections are plain map operations and cannot `.await`, so they cannot
//! perform file I/O.

pub mod app_data;
pub(crate) mod cache;
pub mod config_store;
pub mod error;
pub(crate) mod file_access;
