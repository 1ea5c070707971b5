//! Domain module: configuration keys, entries, and typed values.
//!
//! # Sub-modules
//!
//! - **`key`**   – `ConfigKey`, the only way a caller-supplied key reaches the
//!   store.  Validation happens once, at construction.
//! - **`entry`** – `ConfigEntry` (a key/value pair read from the file) and
//!   `DefaultEntry` (a seed triple written when the file is first created).
//! - **`value`** – `FromConfigValue`, the closed set of string-to-type
//!   conversions used by typed reads.

pub mod entry;
pub mod key;
pub mod value;
