//! Configuration entries and default seed values.

/// A key/value pair as it appears on a data line.
///
/// Both halves are already trimmed.  The value may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A seed entry written, in order, when the config file does not exist yet.
///
/// The optional comment is written on its own `#` line directly above the
/// data line.  Comments conventionally list the accepted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultEntry {
    pub key: String,
    pub value: String,
    pub comment: Option<String>,
}

impl DefaultEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: None,
        }
    }

    /// Attaches a comment line written above the entry.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// The defaults every launcher install starts with.
pub fn builtin_defaults() -> Vec<DefaultEntry> {
    vec![DefaultEntry::new("Theme", "System").with_comment("Available values: Dark, White, System.")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults_seed_system_theme() {
        let defaults = builtin_defaults();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].key, "Theme");
        assert_eq!(defaults[0].value, "System");
        assert!(defaults[0].comment.as_deref().unwrap().contains("Dark"));
    }

    #[test]
    fn test_default_entry_without_comment() {
        let entry = DefaultEntry::new("Language", "English");
        assert_eq!(entry.comment, None);
    }
}
