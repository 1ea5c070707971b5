//! Whole-file operations on config text.
//!
//! All functions scan linearly and apply [`classify`] to each line, so a
//! commented-out setting is never found, updated, or listed.  When a key
//! appears on more than one data line the first occurrence wins, both for
//! reads and for in-place updates.

use std::collections::HashSet;

use crate::domain::entry::{ConfigEntry, DefaultEntry};
use crate::domain::key::{normalize, ConfigKey, COMMENT, SEPARATOR};
use crate::format::line::classify;

/// Header written once, when a config file is first created.
pub const BANNER: &str = "\
######################################
### UnixNetwork configuration file ###
######################################
#
# Comments.
# A line whose first non-blank character is '#' is a comment and is ignored.
# Comments are recognised ONLY at the start of a line. A '#' inside a key or value is part of it.
# Place comments above the key-value pair they describe and list the accepted values there.
#
# General rules.
# Structure: <Key>=<Value>
# For example, 'Theme=Dark' assigns the value Dark to the key Theme.
#
# Key case does not matter. THEME, ThEmE and theme are the same key.
# Value case DOES matter. Dark, DARK, dark and DaRk are different values.
#
# If a key appears more than once, the first occurrence is used.
#
# Better not to change anything here unless you know what you are doing.
# Configuration below
#  \u{2193}  \u{2193}  \u{2193}

";

/// What [`upsert`] did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The first data line for the key was rewritten in place.
    Replaced,
    /// No data line matched; a new line was appended.
    Appended,
}

/// Returns the value on the first data line whose key matches `key`.
///
/// `Some("")` means the key is present with an empty value; `None` means no
/// uncommented line declares it.
pub fn find_value<'a>(content: &'a str, key: &ConfigKey) -> Option<&'a str> {
    content
        .lines()
        .filter_map(|line| classify(line).data())
        .find(|(k, _)| key.matches(k))
        .map(|(_, v)| v)
}

/// Lists every data entry in file order, keeping only the first occurrence of
/// each key (compared case-insensitively).
pub fn parse_entries(content: &str) -> Vec<ConfigEntry> {
    let mut seen = HashSet::new();
    content
        .lines()
        .filter_map(|line| classify(line).data())
        .filter(|(k, _)| seen.insert(normalize(k)))
        .map(|(k, v)| ConfigEntry::new(k, v))
        .collect()
}

/// Sets `key` to `value` in `content` and returns the new file text.
///
/// The first data line for `key` is replaced with `key=value`; every other
/// line (comments, blanks, ignored text, other keys, later duplicates) is kept
/// byte-for-byte and in order.  When no line matches, `key=value` is appended.
/// The result always ends with a newline.
pub fn upsert(content: &str, key: &ConfigKey, value: &str) -> (String, UpsertOutcome) {
    let mut lines: Vec<String> = content.lines().map(str::to_string).collect();
    let new_line = format!("{key}{SEPARATOR}{value}");

    let position = lines
        .iter()
        .position(|line| classify(line).data().is_some_and(|(k, _)| key.matches(k)));

    let outcome = match position {
        Some(index) => {
            lines[index] = new_line;
            UpsertOutcome::Replaced
        }
        None => {
            lines.push(new_line);
            UpsertOutcome::Appended
        }
    };

    let mut text = lines.join("\n");
    text.push('\n');
    (text, outcome)
}

/// Renders the content of a freshly created config file: the banner, then each
/// default as an optional comment line, the data line, and a blank separator.
pub fn render_seeded(defaults: &[DefaultEntry]) -> String {
    let mut text = String::from(BANNER);
    for entry in defaults {
        if let Some(comment) = entry.comment.as_deref().filter(|c| !c.is_empty()) {
            text.push(COMMENT);
            text.push_str(comment);
            text.push('\n');
        }
        text.push_str(&entry.key);
        text.push(SEPARATOR);
        text.push_str(&entry.value);
        text.push_str("\n\n");
    }
    text
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> ConfigKey {
        ConfigKey::parse(k).unwrap()
    }

    #[test]
    fn test_find_value_skips_commented_keys() {
        // Arrange
        let content = "# This is a comment\n\
                       Key1=Value1 # This is NOT a comment\n\
                       # Key2=Value2 This key is commented out\n\
                       Key3=Value3";

        // Act / Assert
        assert_eq!(
            find_value(content, &key("Key1")),
            Some("Value1 # This is NOT a comment")
        );
        assert_eq!(find_value(content, &key("Key2")), None);
        assert_eq!(find_value(content, &key("Key3")), Some("Value3"));
    }

    #[test]
    fn test_find_value_first_duplicate_wins() {
        let content = "Dup=1\nDup=2\n";
        assert_eq!(find_value(content, &key("dup")), Some("1"));
    }

    #[test]
    fn test_find_value_distinguishes_empty_from_absent() {
        let content = "Empty=\n";
        assert_eq!(find_value(content, &key("Empty")), Some(""));
        assert_eq!(find_value(content, &key("Missing")), None);
    }

    #[test]
    fn test_parse_entries_keeps_first_occurrence_in_file_order() {
        // Arrange
        let content = "B=2\n#A=0\nA=1\nb=3\nnoise\n";

        // Act
        let entries = parse_entries(content);

        // Assert
        assert_eq!(
            entries,
            vec![ConfigEntry::new("B", "2"), ConfigEntry::new("A", "1")]
        );
    }

    #[test]
    fn test_upsert_replaces_first_match_in_place() {
        // Arrange
        let content = "#comment\nTheme=Dark\nOther=x\ntheme=White\n";

        // Act
        let (text, outcome) = upsert(content, &key("THEME"), "System");

        // Assert
        assert_eq!(outcome, UpsertOutcome::Replaced);
        assert_eq!(text, "#comment\nTHEME=System\nOther=x\ntheme=White\n");
    }

    #[test]
    fn test_upsert_appends_when_absent() {
        let (text, outcome) = upsert("A=1", &key("B"), "2");
        assert_eq!(outcome, UpsertOutcome::Appended);
        assert_eq!(text, "A=1\nB=2\n");
    }

    #[test]
    fn test_upsert_never_touches_commented_key() {
        let (text, outcome) = upsert("# K=old\n", &key("K"), "new");
        assert_eq!(outcome, UpsertOutcome::Appended);
        assert_eq!(text, "# K=old\nK=new\n");
    }

    #[test]
    fn test_upsert_into_empty_document() {
        let (text, _) = upsert("", &key("K"), "V");
        assert_eq!(text, "K=V\n");
    }

    #[test]
    fn test_upsert_twice_leaves_single_line() {
        let (once, _) = upsert("A=1\n", &key("K"), "V");
        let (twice, _) = upsert(&once, &key("K"), "V");
        assert_eq!(twice, "A=1\nK=V\n");
        assert_eq!(twice.matches("K=V").count(), 1);
    }

    #[test]
    fn test_render_seeded_layout() {
        // Arrange
        let defaults = vec![
            DefaultEntry::new("Theme", "Dark").with_comment("idk, test??"),
            DefaultEntry::new("Language", "English"),
        ];

        // Act
        let text = render_seeded(&defaults);

        // Assert
        assert!(text.starts_with(BANNER));
        assert!(text.ends_with("#idk, test??\nTheme=Dark\n\nLanguage=English\n\n"));
    }

    #[test]
    fn test_banner_is_all_comments_and_blanks() {
        for line in BANNER.lines() {
            let kind = classify(line);
            assert!(
                matches!(kind, crate::Line::Comment | crate::Line::Blank),
                "banner line parsed as {kind:?}: {line:?}"
            );
        }
        assert!(BANNER.contains("UnixNetwork configuration file"));
    }

    #[test]
    fn test_seeded_document_parses_back_to_defaults() {
        let defaults = vec![
            DefaultEntry::new("Theme", "System").with_comment("Available values: Dark, White, System."),
            DefaultEntry::new("Language", "English"),
        ];
        let entries = parse_entries(&render_seeded(&defaults));
        assert_eq!(
            entries,
            vec![
                ConfigEntry::new("Theme", "System"),
                ConfigEntry::new("Language", "English")
            ]
        );
    }
}
