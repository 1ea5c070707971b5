//! Application layer for the launcher.
//!
//! Holds the abstractions the store depends on but does not implement
//! itself.
//!
//! # Sub-modules
//!
//! - **`diagnostics`** – The `DiagnosticSink` boundary through which the
//!   store reports lifecycle events (file created, lock timeout, I/O
//!   failure).  The production sink forwards to `tracing`; a recording sink
//!   is provided for tests.
//!
//! **Dependency rule**: this layer contains no file system access and must
//! not import `infrastructure`.

pub mod diagnostics;
