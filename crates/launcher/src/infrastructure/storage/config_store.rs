//! `ConfigStore`: cached, concurrency-safe access to the launcher config file.
//!
//! # Locking
//!
//! Two locks with separate types:
//!
//! ```text
//!   ConfigCache (RwLock<HashMap>)    FileAccess (Semaphore(1) + timeout)
//!   ─────────────────────────────    ──────────────────────────────────
//!   cache hits, cache updates        create, read-on-miss, write
//!   sync, never held across .await   held across file I/O via FileGuard
//! ```
//!
//! Cache hits never touch the file lock.  A miss takes the file lock,
//! re-checks the cache (another caller may have filled it while we waited),
//! then scans the file.
//!
//! # Lazy initialisation
//!
//! The first operation on a store loads the existing file into the cache or
//! creates it with the default entries.  This happens exactly once no matter
//! how many callers race for it (`tokio::sync::OnceCell`).
//!
//! # Failure policy
//!
//! | Path       | Lock timeout        | I/O error            |
//! |------------|---------------------|----------------------|
//! | set        | `Err(LockTimeout)`  | `Err(Io)`            |
//! | get (miss) | logged, `Ok("")`    | logged, `Ok("")`     |
//! | try-get    | `None`              | `None`               |
//!
//! A failed set rolls its cache update back unless another writer has
//! replaced the entry in the meantime.

use std::any::type_name;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use launcher_core::format::document::UpsertOutcome;
use launcher_core::{
    builtin_defaults, find_value, parse_entries, render_seeded, upsert, ConfigEntry, ConfigKey,
    DefaultEntry, FromConfigValue,
};
use tokio::sync::{broadcast, OnceCell};

use super::app_data::{launcher_dir, AppDataProvider};
use super::cache::ConfigCache;
use super::error::ConfigError;
use super::file_access::{FileAccess, FileGuard};
use crate::application::diagnostics::DiagnosticSink;

/// File name used when none is configured.
pub const DEFAULT_FILE_NAME: &str = "launcher.cfg";

/// How long any operation waits for the file-access lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(10);

/// Capacity of the change-notification channel.  Slow subscribers that fall
/// further behind see a `Lagged` error and then keep receiving.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// How caller-supplied defaults combine with [`builtin_defaults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultsMode {
    /// Use only the supplied defaults.
    #[default]
    Replace,
    /// Append the supplied defaults after the built-in ones.
    Extend,
}

/// Where the store keeps its file and what it seeds it with.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub file_name: String,
    pub directory: PathBuf,
    pub defaults: Vec<DefaultEntry>,
    pub lock_timeout: Duration,
}

impl StoreOptions {
    /// `launcher.cfg` inside `directory`, built-in defaults, 10 s lock timeout.
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            directory: directory.into(),
            defaults: builtin_defaults(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// Options for the standard `<app-data>/UnixNetwork/launcher.cfg` location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformDataDir`] when `provider` has no root.
    pub fn from_app_data(provider: &dyn AppDataProvider) -> Result<Self, ConfigError> {
        Ok(Self::in_directory(launcher_dir(provider)?))
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the entries written when the file is created.
    ///
    /// # Errors
    ///
    /// Every default must read back from the seeded file as itself:
    /// [`ConfigError::InvalidKey`] for a key `ConfigKey::parse` rejects,
    /// [`ConfigError::InvalidValue`] for a value or comment with a line break.
    pub fn with_defaults(
        mut self,
        defaults: Vec<DefaultEntry>,
        mode: DefaultsMode,
    ) -> Result<Self, ConfigError> {
        for entry in &defaults {
            let key = ConfigKey::parse(&entry.key)?;
            let comment = entry.comment.as_deref().unwrap_or_default();
            if entry.value.contains(['\n', '\r']) || comment.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    reason: "default value or comment cannot contain a line break",
                });
            }
        }
        match mode {
            DefaultsMode::Replace => self.defaults = defaults,
            DefaultsMode::Extend => self.defaults.extend(defaults),
        }
        Ok(self)
    }

    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// `directory` joined with `file_name`.
    pub fn full_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// Notification sent to subscribers after every successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigChanged;

/// The launcher's `KEY=VALUE` configuration store.
///
/// Share it behind an `Arc`; every method takes `&self`.
pub struct ConfigStore {
    sink: Arc<dyn DiagnosticSink>,
    file_name: String,
    directory: PathBuf,
    defaults: Vec<DefaultEntry>,
    cache: ConfigCache,
    file: FileAccess,
    initialized: OnceCell<()>,
    changed: broadcast::Sender<ConfigChanged>,
    disposed: AtomicBool,
}

impl ConfigStore {
    /// Creates a store.  Nothing touches the file system until first use.
    pub fn new(sink: Arc<dyn DiagnosticSink>, options: StoreOptions) -> Self {
        let full_path = options.full_path();
        let (changed, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            sink,
            file_name: options.file_name,
            directory: options.directory,
            defaults: options.defaults,
            cache: ConfigCache::new(),
            file: FileAccess::new(full_path, options.lock_timeout),
            initialized: OnceCell::new(),
            changed,
            disposed: AtomicBool::new(false),
        }
    }

    /// Creates a store at the standard platform location with built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformDataDir`] when `provider` has no root.
    pub fn at_app_data(
        sink: Arc<dyn DiagnosticSink>,
        provider: &dyn AppDataProvider,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(sink, StoreOptions::from_app_data(provider)?))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The directory holding the file, without the file name.
    pub fn path_to_file(&self) -> &Path {
        &self.directory
    }

    /// `path_to_file()` joined with `file_name()`.
    pub fn full_file_name(&self) -> &Path {
        self.file.path()
    }

    /// Subscribes to [`ConfigChanged`] notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<ConfigChanged> {
        self.changed.subscribe()
    }

    // ── Writes ────────────────────────────────────────────────────────────────

    /// Sets `key` to `value`, creating the file (with defaults) if needed.
    ///
    /// The value is stringified with `Display` and trimmed.  The cache is
    /// updated first; the file is then rewritten in full under the file lock,
    /// replacing the first data line for the key in place or appending a new
    /// one.  Subscribers are notified once the write has completed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidKey`] / [`ConfigError::InvalidValue`] before any I/O.
    /// - [`ConfigError::LockTimeout`] when the file lock is not acquired in time.
    /// - [`ConfigError::Io`] when the file cannot be read or written.
    /// - [`ConfigError::Disposed`] after [`dispose`](Self::dispose).
    pub async fn create_or_set_property(
        &self,
        key: &str,
        value: impl Display,
    ) -> Result<(), ConfigError> {
        self.ensure_live()?;
        let key = self.check_key(key).await?;
        let value = value.to_string();
        let value = self.check_value(&key, &value).await?;
        self.ensure_initialized().await;

        let previous = self.cache.insert(&key, value);
        match self.write_through(&key, value).await {
            Ok(()) => {
                // No receivers is not an error.
                let _ = self.changed.send(ConfigChanged);
                Ok(())
            }
            Err(err) => {
                self.cache.roll_back(&key, value, previous);
                Err(err)
            }
        }
    }

    /// Rewrites the file with the banner and defaults only, discarding every
    /// other setting, and notifies subscribers.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LockTimeout`], [`ConfigError::Io`], or [`ConfigError::Disposed`].
    pub async fn reset_to_defaults(&self) -> Result<(), ConfigError> {
        self.ensure_live()?;
        self.ensure_initialized().await;
        {
            let guard = self.lock_file("resetting").await?;
            self.create_locked(&guard).await?;
        }
        let _ = self.changed.send(ConfigChanged);
        Ok(())
    }

    // ── Reads ─────────────────────────────────────────────────────────────────

    /// Returns the value for `key`, or `""` when it is not set.
    ///
    /// Cache hits return without touching the file.  Lock timeouts and I/O
    /// failures on the miss path are logged and produce `""`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidKey`] or [`ConfigError::Disposed`] only.
    pub async fn get_property(&self, key: &str) -> Result<String, ConfigError> {
        self.ensure_live()?;
        let key = self.check_key(key).await?;
        self.get_validated(&key).await
    }

    /// [`get_property`](Self::get_property) for a key that is already validated.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Disposed`] only.
    pub async fn get_validated(&self, key: &ConfigKey) -> Result<String, ConfigError> {
        self.ensure_live()?;
        self.ensure_initialized().await;
        Ok(self.read_through(key).await)
    }

    /// Reads `key` and converts it to `T`.
    ///
    /// Returns `None` for an invalid key, a failed read, or a value that does
    /// not parse as `T`; use `unwrap_or_default()` for the type's default.
    /// `String` always succeeds, yielding `""` for an absent key.
    pub async fn try_get_property<T: FromConfigValue>(&self, key: &str) -> Option<T> {
        let key = self.check_key(key).await.ok()?;
        let raw = match self.get_validated(&key).await {
            Ok(raw) => raw,
            Err(err) => {
                self.sink.error("Error getting property", Some(&err)).await;
                return None;
            }
        };
        let value = T::from_config_value(&raw);
        if value.is_none() {
            self.sink
                .debug(&format!(
                    "Type conversion failed for `{key}`: {raw:?} is not a valid {}",
                    type_name::<T>()
                ))
                .await;
        }
        value
    }

    /// Every data entry in the file, in file order, first occurrence per key.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LockTimeout`], [`ConfigError::Io`], or [`ConfigError::Disposed`].
    pub async fn entries(&self) -> Result<Vec<ConfigEntry>, ConfigError> {
        self.ensure_live()?;
        self.ensure_initialized().await;
        let guard = self.lock_file("listing").await?;
        let content = match guard.read().await {
            Ok(Some(content)) => content,
            Ok(None) => self.create_locked(&guard).await?,
            Err(err) => {
                self.sink.error("Error reading config file", Some(&err)).await;
                return Err(err);
            }
        };
        Ok(parse_entries(&content))
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────────

    /// Releases the file lock and clears the cache.  Later operations fail
    /// with [`ConfigError::Disposed`].  Calling it again does nothing.
    pub fn dispose(&self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }
        self.file.close();
        self.cache.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn ensure_live(&self) -> Result<(), ConfigError> {
        if self.is_disposed() {
            Err(ConfigError::Disposed)
        } else {
            Ok(())
        }
    }

    async fn check_key(&self, key: &str) -> Result<ConfigKey, ConfigError> {
        match ConfigKey::parse(key) {
            Ok(key) => Ok(key),
            Err(err) => {
                let err = ConfigError::from(err);
                self.sink.error("Rejected config key", Some(&err)).await;
                Err(err)
            }
        }
    }

    async fn check_value<'v>(&self, key: &ConfigKey, value: &'v str) -> Result<&'v str, ConfigError> {
        let value = value.trim();
        if value.contains(['\n', '\r']) {
            let err = ConfigError::InvalidValue {
                key: key.to_string(),
                reason: "value cannot contain a line break",
            };
            self.sink.error("Rejected config value", Some(&err)).await;
            return Err(err);
        }
        Ok(value)
    }

    async fn ensure_initialized(&self) {
        self.initialized.get_or_init(|| self.initialize()).await;
    }

    async fn initialize(&self) {
        let guard = match self.lock_file("initializing").await {
            Ok(guard) => guard,
            Err(_) => return,
        };
        match guard.read().await {
            Ok(Some(content)) => {
                let entries = parse_entries(&content);
                let cached = self
                    .cache
                    .replace_all(entries.iter().map(|e| (e.key.as_str(), e.value.as_str())));
                self.sink
                    .debug(&format!(
                        "Loaded {cached} cached entries from {}",
                        self.file.path().display()
                    ))
                    .await;
            }
            Ok(None) => {
                // Failure is already logged; set/get retry creation later.
                let _ = self.create_locked(&guard).await;
            }
            Err(err) => self.sink.error("Error initializing config", Some(&err)).await,
        }
    }

    /// Acquires the file lock, logging a failure before returning it.
    async fn lock_file(&self, operation: &'static str) -> Result<FileGuard<'_>, ConfigError> {
        match self.file.lock(operation).await {
            Ok(guard) => Ok(guard),
            Err(err) => {
                self.sink
                    .error(
                        &format!("Failed to acquire lock for {operation} config"),
                        Some(&err),
                    )
                    .await;
                Err(err)
            }
        }
    }

    /// Writes the banner and defaults and seeds the cache with them.
    /// Returns the text written.
    async fn create_locked(&self, guard: &FileGuard<'_>) -> Result<String, ConfigError> {
        let text = render_seeded(&self.defaults);
        if let Err(err) = guard.write(&text).await {
            self.sink.error("Error creating config file", Some(&err)).await;
            return Err(err);
        }
        self.cache.replace_all(
            self.defaults
                .iter()
                .map(|d| (d.key.as_str(), d.value.as_str())),
        );
        self.sink
            .debug(&format!(
                "Created default config at {}",
                self.file.path().display()
            ))
            .await;
        Ok(text)
    }

    async fn write_through(&self, key: &ConfigKey, value: &str) -> Result<(), ConfigError> {
        let guard = self.lock_file("updating").await?;

        let content = match guard.read().await {
            Ok(Some(content)) => content,
            Ok(None) => {
                self.sink
                    .debug(&format!(
                        "{} does not exist, creating...",
                        self.file.path().display()
                    ))
                    .await;
                self.create_locked(&guard).await?
            }
            Err(err) => {
                self.sink
                    .error("Error reading config file during update", Some(&err))
                    .await;
                return Err(err);
            }
        };

        let (text, outcome) = upsert(&content, key, value);
        if let Err(err) = guard.write(&text).await {
            self.sink.error("Error writing to config file", Some(&err)).await;
            return Err(err);
        }

        // Creation above may have reset the cache to the defaults.
        self.cache.insert(key, value);

        let action = match outcome {
            UpsertOutcome::Replaced => "Updated",
            UpsertOutcome::Appended => "Added",
        };
        self.sink.debug(&format!("{action} config key `{key}`")).await;
        Ok(())
    }

    async fn read_through(&self, key: &ConfigKey) -> String {
        if let Some(value) = self.cache.get(key) {
            return value;
        }

        let guard = match self.lock_file("reading").await {
            Ok(guard) => guard,
            Err(_) => return String::new(),
        };

        if let Some(value) = self.cache.get(key) {
            return value;
        }

        match guard.read().await {
            Ok(Some(content)) => match find_value(&content, key) {
                Some(value) => {
                    // Empty values are not cached.
                    self.cache.insert(key, value);
                    value.to_string()
                }
                None => String::new(),
            },
            Ok(None) => match self.create_locked(&guard).await {
                Ok(_) => self.cache.get(key).unwrap_or_default(),
                Err(_) => String::new(),
            },
            Err(err) => {
                self.sink.error("Error reading config file", Some(&err)).await;
                String::new()
            }
        }
    }
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("path", &self.file.path())
            .field("cached", &self.cache.len())
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
