//! Typed conversions for configuration values.
//!
//! Values are stored as strings.  Typed reads go through [`FromConfigValue`],
//! a closed set of parsers that return `None` on any parse failure instead of
//! panicking or raising an error.
//!
//! | Type                     | Accepted input                                  |
//! |--------------------------|-------------------------------------------------|
//! | `String`                 | anything (pass-through, including `""`)         |
//! | `bool`                   | `true` / `false`, any letter case               |
//! | integers                 | decimal, optional sign, surrounding whitespace  |
//! | `f32` / `f64`            | anything `str::parse` accepts                   |
//! | `char`                   | exactly one character                           |
//! | [`Theme`]                | `Dark`, `White`, `System` (case-sensitive)      |

use std::fmt;

/// Parses a raw configuration string into a typed value.
pub trait FromConfigValue: Sized {
    /// Returns `None` when `raw` is not a valid representation of `Self`.
    fn from_config_value(raw: &str) -> Option<Self>;
}

impl FromConfigValue for String {
    fn from_config_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromConfigValue for bool {
    fn from_config_value(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Some(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }
}

impl FromConfigValue for char {
    fn from_config_value(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

macro_rules! from_str_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromConfigValue for $ty {
                fn from_config_value(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

from_str_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// The launcher colour theme preference, stored under the `Theme` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Dark,
    White,
    /// Follow the operating system setting.
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::White => "White",
            Theme::System => "System",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromConfigValue for Theme {
    fn from_config_value(raw: &str) -> Option<Self> {
        // Values are case-sensitive: `dark` is not a theme.
        match raw.trim() {
            "Dark" => Some(Theme::Dark),
            "White" => Some(Theme::White),
            "System" => Some(Theme::System),
            _ => None,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
