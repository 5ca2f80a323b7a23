//! Read-only snapshot of the host keyboard state.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::{KeyboardAction, KeyboardType, ReturnKeyType};

/// Keyboard locales with dedicated input sets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum KeyboardLocale {
    /// English (US)
    #[default]
    English,
    /// English (UK)
    EnglishGb,
    /// Chinese (Simplified)
    ChineseSimplified,
}

impl KeyboardLocale {
    /// All supported locales.
    pub const ALL: [Self; 3] = [Self::English, Self::EnglishGb, Self::ChineseSimplified];

    /// BCP 47 identifier of the locale.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::EnglishGb => "en-GB",
            Self::ChineseSimplified => "zh-Hans",
        }
    }

    /// Currency symbol placed on the numeric keyboard.
    #[must_use]
    pub const fn primary_currency(self) -> &'static str {
        match self {
            Self::English => "$",
            Self::EnglishGb => "£",
            Self::ChineseSimplified => "¥",
        }
    }
}

impl fmt::Display for KeyboardLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for KeyboardLocale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en-us" => Ok(Self::English),
            "en-gb" => Ok(Self::EnglishGb),
            "zh" | "zh-hans" | "zh-cn" => Ok(Self::ChineseSimplified),
            _ => anyhow::bail!("Unsupported keyboard locale '{s}'. Expected en, en-GB or zh-Hans"),
        }
    }
}

impl TryFrom<String> for KeyboardLocale {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<KeyboardLocale> for String {
    fn from(value: KeyboardLocale) -> Self {
        value.id().to_string()
    }
}

/// Device interface orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Taller than wide
    #[default]
    Portrait,
    /// Wider than tall
    Landscape,
}

impl Orientation {
    /// Whether the device is in portrait.
    #[must_use]
    pub const fn is_portrait(self) -> bool {
        matches!(self, Self::Portrait)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => anyhow::bail!("Unknown orientation '{s}'. Expected portrait or landscape"),
        }
    }
}

/// Snapshot of the keyboard state that layout composition reads from.
///
/// The host owns the live state and hands a fresh snapshot to the layout
/// service whenever the keyboard type, locale, orientation or capabilities
/// change. Nothing in this crate mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyboardContext {
    /// Keyboard type currently shown
    pub keyboard_type: KeyboardType,
    /// Active keyboard locale
    #[serde(default)]
    pub locale: KeyboardLocale,
    /// Device orientation
    #[serde(default)]
    pub orientation: Orientation,
    /// Whether the host requires a globe key to switch input modes
    #[serde(default)]
    pub needs_input_mode_switch_key: bool,
    /// Action the host shows in place of the dictation key, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictation_replacement: Option<KeyboardAction>,
    /// Return key flavor requested by the focused text field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_key_type: Option<ReturnKeyType>,
}

impl KeyboardContext {
    /// Creates a context for the given keyboard type with default settings.
    pub fn new(keyboard_type: KeyboardType) -> Self {
        Self {
            keyboard_type,
            ..Self::default()
        }
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: KeyboardLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the orientation.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets whether the globe key is required.
    #[must_use]
    pub fn with_input_mode_switch_key(mut self, needs_switch_key: bool) -> Self {
        self.needs_input_mode_switch_key = needs_switch_key;
        self
    }

    /// Sets the dictation replacement action.
    #[must_use]
    pub fn with_dictation_replacement(mut self, action: KeyboardAction) -> Self {
        self.dictation_replacement = Some(action);
        self
    }

    /// Sets the return key flavor.
    #[must_use]
    pub fn with_return_key_type(mut self, return_key_type: ReturnKeyType) -> Self {
        self.return_key_type = Some(return_key_type);
        self
    }

    /// Whether the current keyboard type uses the 4-row grid layout.
    #[must_use]
    pub fn is_grid_view_keyboard_type(&self) -> bool {
        self.keyboard_type.is_grid_view()
    }

    /// Whether the device is in portrait.
    #[must_use]
    pub const fn is_portrait(&self) -> bool {
        self.orientation.is_portrait()
    }
}
