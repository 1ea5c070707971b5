//! Infrastructure layer for the launcher.
//!
//! Contains OS-facing adapters: the platform app-data path provider and the
//! file-backed configuration store.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `launcher_core`, but MUST NOT be imported by the `application` layer.

pub mod storage;
