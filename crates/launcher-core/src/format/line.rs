//! Single-line classification.
//!
//! A line is, after trimming surrounding whitespace:
//!
//! - **blank** when nothing is left,
//! - a **comment** when it starts with `#`,
//! - **data** when it contains `=`: the key is everything before the first
//!   `=`, the value everything after it, both trimmed,
//! - **ignored** otherwise.
//!
//! A `#` after the start of a data line is ordinary text.  `Key=a#b` has the
//! value `a#b`.

use crate::domain::key::{COMMENT, SEPARATOR};

/// Classification of one line of the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Blank,
    Comment,
    Data { key: &'a str, value: &'a str },
    /// Non-blank, non-comment text without `=`.  Left untouched on write.
    Ignored,
}

impl<'a> Line<'a> {
    /// Returns the key/value pair of a data line with a non-empty key.
    pub fn data(self) -> Option<(&'a str, &'a str)> {
        match self {
            Line::Data { key, value } if !key.is_empty() => Some((key, value)),
            _ => None,
        }
    }
}

/// Classifies a raw line (with or without its trailing `\r`).
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with(COMMENT) {
        return Line::Comment;
    }
    match trimmed.split_once(SEPARATOR) {
        Some((key, value)) => Line::Data {
            key: key.trim(),
            value: value.trim(),
        },
        None => Line::Ignored,
    }
}
