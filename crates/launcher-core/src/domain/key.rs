//! Validated configuration keys.
//!
//! Keys are compared case-insensitively everywhere: `THEME`, `ThEmE` and
//! `theme` all name the same setting.  The original spelling is kept for
//! writing so that a freshly appended line reads the way the caller typed it.
//!
//! # Rules
//!
//! A key is rejected when it is empty or whitespace-only, contains `=`, starts
//! with `#`, or contains a line break.  The last two rules exist because such
//! a key would be written as something the reader never parses back as a
//! data line (a comment, or a split line).

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// The character separating key from value on a data line.
pub const SEPARATOR: char = '=';

/// The character that starts a comment line.
pub const COMMENT: char = '#';

/// Reasons a key can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key cannot be null or empty")]
    Empty,
    #[error("key `{key}` cannot contain the '=' symbol")]
    ContainsSeparator { key: String },
    #[error("key `{key}` cannot start with the '#' comment marker")]
    CommentPrefix { key: String },
    #[error("key cannot contain a line break")]
    LineBreak,
}

/// A trimmed, validated configuration key.
///
/// Equality and hashing use the case-folded form, so a `ConfigKey` can be
/// used directly as a map key with case-insensitive semantics.
#[derive(Debug, Clone)]
pub struct ConfigKey {
    raw: String,
    normalized: String,
}

impl ConfigKey {
    /// Validates and trims `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] describing the first rule the key violates.
    pub fn parse(key: &str) -> Result<Self, KeyError> {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(KeyError::Empty);
        }
        if trimmed.contains(['\n', '\r']) {
            return Err(KeyError::LineBreak);
        }
        if trimmed.contains(SEPARATOR) {
            return Err(KeyError::ContainsSeparator {
                key: trimmed.to_string(),
            });
        }
        if trimmed.starts_with(COMMENT) {
            return Err(KeyError::CommentPrefix {
                key: trimmed.to_string(),
            });
        }
        Ok(Self {
            raw: trimmed.to_string(),
            normalized: normalize(trimmed),
        })
    }

    /// The key as the caller spelled it (trimmed).
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The case-folded form used as the cache key.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Returns `true` when `other` names the same setting, ignoring case and
    /// surrounding whitespace.
    pub fn matches(&self, other: &str) -> bool {
        // Same folding as the cache key; per-char lowercasing differs for
        // context-sensitive letters such as a word-final `Σ`.
        normalize(other) == self.normalized
    }
}

/// Case-folds a key for map lookups.
pub fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

impl PartialEq for ConfigKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ConfigKey {}

impl Hash for ConfigKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<&str> for ConfigKey {
    type Error = KeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
