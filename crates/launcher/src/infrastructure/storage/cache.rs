//! The cache lock: an in-memory, case-insensitive view of the config file.
//!
//! Every method takes the lock, does a map operation, and releases it before
//! returning.  No guard escapes this module, and the methods are synchronous,
//! so nothing can `.await` (and therefore nothing can touch the file) while
//! the lock is held.
//!
//! Empty values are never cached.  Storing `""` evicts the key instead, so a
//! later read goes to the file and returns the empty string from there.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use launcher_core::domain::key::normalize;
use launcher_core::ConfigKey;

#[derive(Debug, Default)]
pub(crate) struct ConfigCache {
    entries: RwLock<HashMap<String, String>>,
}

impl ConfigCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value, if any.  A hit is never empty.
    pub(crate) fn get(&self, key: &ConfigKey) -> Option<String> {
        self.read().get(key.normalized()).cloned()
    }

    /// Stores `value` and returns whatever was cached before.
    pub(crate) fn insert(&self, key: &ConfigKey, value: &str) -> Option<String> {
        let mut entries = self.write();
        if value.is_empty() {
            entries.remove(key.normalized())
        } else {
            entries.insert(key.normalized().to_string(), value.to_string())
        }
    }

    /// Undoes an [`insert`](Self::insert) of `written`, restoring `previous`.
    ///
    /// Does nothing when another writer has changed the entry since, so a
    /// newer successful write is never clobbered.
    pub(crate) fn roll_back(&self, key: &ConfigKey, written: &str, previous: Option<String>) {
        let mut entries = self.write();
        let current = entries.get(key.normalized()).map(String::as_str);
        let ours = (!written.is_empty()).then_some(written);
        if current != ours {
            return;
        }
        match previous {
            Some(value) => entries.insert(key.normalized().to_string(), value),
            None => entries.remove(key.normalized()),
        };
    }

    /// Replaces the whole cache.  Later duplicates of a key are ignored.
    pub(crate) fn replace_all<'a, I>(&self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = self.write();
        entries.clear();
        for (key, value) in pairs {
            if !value.is_empty() {
                entries.entry(normalize(key)).or_insert_with(|| value.to_string());
            }
        }
        entries.len()
    }

    pub(crate) fn clear(&self) {
        self.write().clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.read().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ConfigKey {
        ConfigKey::parse(k).unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let cache = ConfigCache::new();
        cache.insert(&key("Theme"), "Dark");
        assert_eq!(cache.get(&key("THEME")).as_deref(), Some("Dark"));
        assert_eq!(cache.get(&key("theme")).as_deref(), Some("Dark"));
    }

    #[test]
    fn test_empty_value_evicts() {
        // Arrange
        let cache = ConfigCache::new();
        cache.insert(&key("K"), "V");

        // Act
        let previous = cache.insert(&key("k"), "");

        // Assert
        assert_eq!(previous.as_deref(), Some("V"));
        assert_eq!(cache.get(&key("K")), None);
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn test_roll_back_restores_previous_value() {
        let cache = ConfigCache::new();
        cache.insert(&key("K"), "old");
        let previous = cache.insert(&key("K"), "new");

        cache.roll_back(&key("K"), "new", previous);

        assert_eq!(cache.get(&key("K")).as_deref(), Some("old"));
    }

    #[test]
    fn test_roll_back_removes_entry_that_did_not_exist() {
        let cache = ConfigCache::new();
        let previous = cache.insert(&key("K"), "new");

        cache.roll_back(&key("K"), "new", previous);

        assert_eq!(cache.get(&key("K")), None);
    }

    #[test]
    fn test_roll_back_keeps_newer_write() {
        // Arrange: a second writer replaced our value before we rolled back.
        let cache = ConfigCache::new();
        let previous = cache.insert(&key("K"), "ours");
        cache.insert(&key("K"), "theirs");

        // Act
        cache.roll_back(&key("K"), "ours", previous);

        // Assert
        assert_eq!(cache.get(&key("K")).as_deref(), Some("theirs"));
    }

    #[test]
    fn test_replace_all_skips_empty_and_keeps_first_duplicate() {
        let cache = ConfigCache::new();
        cache.insert(&key("Stale"), "x");

        let count = cache.replace_all([("Dup", "1"), ("dup", "2"), ("Empty", "")]);

        assert_eq!(count, 1);
        assert_eq!(cache.get(&key("DUP")).as_deref(), Some("1"));
        assert_eq!(cache.get(&key("Stale")), None);
        assert_eq!(cache.get(&key("Empty")), None);
    }
}
