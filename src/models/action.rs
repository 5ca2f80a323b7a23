//! Keyboard actions: the value carried by every cell of a composed layout.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::KeyboardType;

/// Semantic flavor of the primary (return) key, chosen by the host text field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReturnKeyType {
    /// Plain newline
    #[default]
    Return,
    /// Finish editing
    Done,
    /// Navigate to the entered address
    Go,
    /// Run a search
    Search,
    /// Send a message
    Send,
    /// Move to the next field
    Next,
    /// Host-provided title
    Custom(String),
}

impl fmt::Display for ReturnKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return => write!(f, "return"),
            Self::Done => write!(f, "done"),
            Self::Go => write!(f, "go"),
            Self::Search => write!(f, "search"),
            Self::Send => write!(f, "send"),
            Self::Next => write!(f, "next"),
            Self::Custom(title) => write!(f, "custom:{title}"),
        }
    }
}

impl FromStr for ReturnKeyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(title) = s.strip_prefix("custom:") {
            if title.is_empty() {
                anyhow::bail!("Custom return key needs a title (e.g. custom:Join)");
            }
            return Ok(Self::Custom(title.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "return" => Ok(Self::Return),
            "done" => Ok(Self::Done),
            "go" => Ok(Self::Go),
            "search" => Ok(Self::Search),
            "send" => Ok(Self::Send),
            "next" => Ok(Self::Next),
            _ => anyhow::bail!(
                "Unknown return key type '{s}'. Expected return, done, go, search, send, next or custom:<title>"
            ),
        }
    }
}

impl TryFrom<String> for ReturnKeyType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ReturnKeyType> for String {
    fn from(value: ReturnKeyType) -> Self {
        value.to_string()
    }
}

/// An action triggered by a keyboard cell.
///
/// Actions are plain values: two actions are the same action when their
/// tag and payload are equal.
///
/// # Textual form
///
/// | Action                 | Text                  |
/// |------------------------|-----------------------|
/// | `Character("a")`       | `char:a`              |
/// | `Backspace`            | `backspace`           |
/// | `Shift`                | `shift`               |
/// | `Space`                | `space`               |
/// | `Primary(Done)`        | `primary:done`        |
/// | `NextKeyboard`         | `next-keyboard`       |
/// | `KeyboardType(Numeric)`| `keyboard:numeric`    |
/// | `Custom("Wildcard")`   | `custom:Wildcard`     |
/// | `Dictation`            | `dictation`           |
/// | `None`                 | `none`                |
///
/// Every action parses back from its text; an empty glyph is `char:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyboardAction {
    /// Inserts the glyph
    Character(String),
    /// Deletes backwards
    Backspace,
    /// Toggles the alphabetic case
    Shift,
    /// Inserts a space
    Space,
    /// Return key, flavored by the text field
    Primary(ReturnKeyType),
    /// Switches to the next system input mode (globe key)
    NextKeyboard,
    /// Switches to another keyboard type
    KeyboardType(KeyboardType),
    /// Host-defined button identified by name
    Custom(String),
    /// Starts dictation
    Dictation,
    /// Placeholder that does nothing
    None,
}

impl KeyboardAction {
    /// Creates a character action for a glyph.
    pub fn character(glyph: impl Into<String>) -> Self {
        Self::Character(glyph.into())
    }

    /// Whether this action inserts a glyph.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(self, Self::Character(_))
    }

    /// Whether this action is chrome around the character keys.
    #[must_use]
    pub const fn is_system_action(&self) -> bool {
        !matches!(self, Self::Character(_) | Self::Space | Self::None)
    }

    /// Short label for text previews.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Character(glyph) => glyph.clone(),
            Self::Backspace => "⌫".to_string(),
            Self::Shift => "⇧".to_string(),
            Self::Space => "space".to_string(),
            Self::Primary(return_type) => return_type.to_string(),
            Self::NextKeyboard => "🌐".to_string(),
            Self::KeyboardType(keyboard_type) => match keyboard_type {
                KeyboardType::Alphabetic(_) => "ABC".to_string(),
                KeyboardType::Numeric => "123".to_string(),
                KeyboardType::Symbolic => "#+=".to_string(),
                KeyboardType::Emojis => "☺".to_string(),
                KeyboardType::Custom(name) => name.clone(),
            },
            Self::Custom(name) => format!("<{name}>"),
            Self::Dictation => "🎤".to_string(),
            Self::None => String::new(),
        }
    }
}

impl fmt::Display for KeyboardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character(glyph) => write!(f, "char:{glyph}"),
            Self::Backspace => write!(f, "backspace"),
            Self::Shift => write!(f, "shift"),
            Self::Space => write!(f, "space"),
            Self::Primary(return_type) => write!(f, "primary:{return_type}"),
            Self::NextKeyboard => write!(f, "next-keyboard"),
            Self::KeyboardType(keyboard_type) => write!(f, "keyboard:{keyboard_type}"),
            Self::Custom(name) => write!(f, "custom:{name}"),
            Self::Dictation => write!(f, "dictation"),
            Self::None => write!(f, "none"),
        }
    }
}

impl FromStr for KeyboardAction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        // Glyphs may be whitespace-sensitive, so only the tag is trimmed
        let s = s.trim_start();
        if let Some(glyph) = s.strip_prefix("char:") {
            return Ok(Self::Character(glyph.to_string()));
        }
        if let Some(return_type) = s.strip_prefix("primary:") {
            return Ok(Self::Primary(return_type.parse()?));
        }
        if let Some(keyboard_type) = s.strip_prefix("keyboard:") {
            return Ok(Self::KeyboardType(keyboard_type.parse()?));
        }
        if let Some(name) = s.strip_prefix("custom:") {
            if name.is_empty() {
                anyhow::bail!("Custom action needs a name (e.g. custom:Wildcard)");
            }
            return Ok(Self::Custom(name.to_string()));
        }

        match s.trim_end().to_ascii_lowercase().as_str() {
            "backspace" => Ok(Self::Backspace),
            "shift" => Ok(Self::Shift),
            "space" => Ok(Self::Space),
            "return" | "primary" => Ok(Self::Primary(ReturnKeyType::Return)),
            "next-keyboard" | "globe" => Ok(Self::NextKeyboard),
            "dictation" => Ok(Self::Dictation),
            "none" => Ok(Self::None),
            other => anyhow::bail!("Unknown keyboard action '{other}'"),
        }
    }
}

impl TryFrom<String> for KeyboardAction {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<KeyboardAction> for String {
    fn from(value: KeyboardAction) -> Self {
        value.to_string()
    }
}

/// A single row of actions, rendered left to right.
pub type KeyboardActions = Vec<KeyboardAction>;

/// A composed grid of actions, row-major.
pub type KeyboardActionRows = Vec<KeyboardActions>;
