//! Keyboard types and casing.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::GRID_KEYBOARD_TYPES;

/// Casing of the alphabetic keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardCase {
    /// Lowercase letters
    #[default]
    Lowercased,
    /// Uppercase letters for the next character
    Uppercased,
    /// Uppercase letters until shift is released
    CapsLocked,
    /// Host decides based on the text field's autocapitalization
    Auto,
}

impl KeyboardCase {
    /// Whether glyphs should be rendered in uppercase.
    #[must_use]
    pub const fn is_uppercased(self) -> bool {
        matches!(self, Self::Uppercased | Self::CapsLocked)
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Lowercased => "lowercased",
            Self::Uppercased => "uppercased",
            Self::CapsLocked => "capslocked",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for KeyboardCase {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercased" | "lower" => Ok(Self::Lowercased),
            "uppercased" | "upper" => Ok(Self::Uppercased),
            "capslocked" | "caps" => Ok(Self::CapsLocked),
            "auto" => Ok(Self::Auto),
            other => anyhow::bail!(
                "Unknown keyboard case '{other}'. Expected lowercased, uppercased, capslocked or auto"
            ),
        }
    }
}

/// The keyboard type currently shown by the host.
///
/// Textual form: `alphabetic`, `alphabetic:<case>`, `numeric`, `symbolic`,
/// `emojis`, `custom:<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyboardType {
    /// Letter keyboard with the given casing
    Alphabetic(KeyboardCase),
    /// Digits and common punctuation
    Numeric,
    /// Brackets, math and currency symbols
    Symbolic,
    /// Emoji picker (composed entirely by the host)
    Emojis,
    /// Host-defined keyboard identified by name
    Custom(String),
}

impl KeyboardType {
    /// The 9-key number grid keyboard.
    pub fn number_grid() -> Self {
        Self::Custom(crate::constants::NUMBER_GRID.to_string())
    }

    /// Whether this type is laid out as a 4-row grid instead of the standard rows.
    #[must_use]
    pub fn is_grid_view(&self) -> bool {
        match self {
            Self::Custom(name) => GRID_KEYBOARD_TYPES.contains(&name.as_str()),
            _ => false,
        }
    }

    /// Whether this is the numeric or the symbolic keyboard.
    #[must_use]
    pub const fn is_numeric_or_symbolic(&self) -> bool {
        matches!(self, Self::Numeric | Self::Symbolic)
    }
}

impl Default for KeyboardType {
    fn default() -> Self {
        Self::Alphabetic(KeyboardCase::Lowercased)
    }
}

impl fmt::Display for KeyboardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alphabetic(case) => write!(f, "alphabetic:{}", case.as_str()),
            Self::Numeric => write!(f, "numeric"),
            Self::Symbolic => write!(f, "symbolic"),
            Self::Emojis => write!(f, "emojis"),
            Self::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}

impl FromStr for KeyboardType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(name) = s.strip_prefix("custom:") {
            if name.is_empty() {
                anyhow::bail!("Custom keyboard type needs a name (e.g. custom:NumberGrid)");
            }
            return Ok(Self::Custom(name.to_string()));
        }
        if let Some(case) = s.strip_prefix("alphabetic:") {
            return Ok(Self::Alphabetic(case.parse()?));
        }

        match s.to_ascii_lowercase().as_str() {
            "alphabetic" => Ok(Self::Alphabetic(KeyboardCase::Lowercased)),
            "numeric" => Ok(Self::Numeric),
            "symbolic" => Ok(Self::Symbolic),
            "emojis" => Ok(Self::Emojis),
            // Shorthand for the grid keyboard on the command line
            "numbergrid" | "number-grid" | "grid" => Ok(Self::number_grid()),
            _ => anyhow::bail!(
                "Unknown keyboard type '{s}'. Expected alphabetic[:case], numeric, symbolic, emojis or custom:<name>"
            ),
        }
    }
}

impl TryFrom<String> for KeyboardType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<KeyboardType> for String {
    fn from(value: KeyboardType) -> Self {
        value.to_string()
    }
}
