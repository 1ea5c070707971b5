//! # launcher-core
//!
//! Shared library for the UnixNetwork launcher containing the configuration
//! domain types and the line-oriented `KEY=VALUE` file format.
//!
//! This crate has zero dependencies on the file system, the async runtime, or
//! the process environment.  The `launcher` crate wraps it with the cached,
//! lock-protected file store.
//!
//! # Architecture overview
//!
//! The launcher keeps its user-editable settings (theme, and whatever other
//! subsystems choose to persist) in a single flat text file:
//!
//! ```text
//! #Available values: Dark, White, System.
//! Theme=Dark
//! ```
//!
//! This crate defines:
//!
//! - **`domain`** – What a setting is.  `ConfigKey` is a validated,
//!   case-insensitive key; `ConfigEntry` and `DefaultEntry` are the pairs and
//!   seed triples; `FromConfigValue` is the closed set of typed conversions.
//!
//! - **`format`** – How settings look on disk.  Line classification (comment,
//!   blank, data) and whole-document operations: lookup, listing, in-place
//!   upsert, and rendering a freshly seeded file.

pub mod domain;
pub mod format;

pub use domain::entry::{builtin_defaults, ConfigEntry, DefaultEntry};
pub use domain::key::{ConfigKey, KeyError};
pub use domain::value::{FromConfigValue, Theme};
pub use format::document::{find_value, parse_entries, render_seeded, upsert, UpsertOutcome, BANNER};
pub use format::line::{classify, Line};
