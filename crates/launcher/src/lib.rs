//! unix-launcher library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.

pub mod application;
pub mod infrastructure;

pub use application::diagnostics::{DiagnosticSink, TracingSink};
pub use infrastructure::storage::app_data::{AppDataProvider, PlatformAppData};
pub use infrastructure::storage::config_store::{
    ConfigChanged, ConfigStore, DefaultsMode, StoreOptions, DEFAULT_FILE_NAME,
    DEFAULT_LOCK_TIMEOUT,
};
pub use infrastructure::storage::error::ConfigError;
