//! Configuration management for the layout engine.
//!
//! This module handles loading, validating, and saving configuration in TOML
//! format with platform-specific directory resolution. The configuration holds
//! the data the composition rules read but do not decide: system button widths,
//! per-locale accessory actions, and default context values for the CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_DIR_NAME;
use crate::models::{
    KeyboardAction, KeyboardLayoutItemWidth, KeyboardLocale, Orientation, ReturnKeyType,
};

/// Widths of the system buttons, per orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidthConfig {
    /// Bottom row switch keys and dictation replacement, portrait
    pub bottom_system_button_portrait: KeyboardLayoutItemWidth,
    /// Bottom row switch keys and dictation replacement, landscape
    pub bottom_system_button_landscape: KeyboardLayoutItemWidth,
    /// Shift and backspace, portrait
    pub lower_system_button_portrait: KeyboardLayoutItemWidth,
    /// Shift and backspace, landscape
    pub lower_system_button_landscape: KeyboardLayoutItemWidth,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            bottom_system_button_portrait: KeyboardLayoutItemWidth::Percentage(0.123),
            bottom_system_button_landscape: KeyboardLayoutItemWidth::Percentage(0.095),
            lower_system_button_portrait: KeyboardLayoutItemWidth::Percentage(0.13),
            lower_system_button_landscape: KeyboardLayoutItemWidth::Percentage(0.115),
        }
    }
}

impl WidthConfig {
    /// Width of bottom row system buttons for the orientation.
    #[must_use]
    pub const fn bottom_system_button(&self, orientation: Orientation) -> KeyboardLayoutItemWidth {
        match orientation {
            Orientation::Portrait => self.bottom_system_button_portrait,
            Orientation::Landscape => self.bottom_system_button_landscape,
        }
    }

    /// Width of shift and backspace for the orientation.
    #[must_use]
    pub const fn lower_system_button(&self, orientation: Orientation) -> KeyboardLayoutItemWidth {
        match orientation {
            Orientation::Portrait => self.lower_system_button_portrait,
            Orientation::Landscape => self.lower_system_button_landscape,
        }
    }

    fn validate(&self) -> Result<()> {
        let widths = [
            ("bottom_system_button_portrait", self.bottom_system_button_portrait),
            ("bottom_system_button_landscape", self.bottom_system_button_landscape),
            ("lower_system_button_portrait", self.lower_system_button_portrait),
            ("lower_system_button_landscape", self.lower_system_button_landscape),
        ];
        for (name, width) in widths {
            width
                .validate()
                .with_context(|| format!("Invalid width for widths.{name}"))?;
        }
        Ok(())
    }
}

/// Leading and trailing actions for the three standard rows of one locale.
///
/// A slot left unset keeps the built-in actions; an empty list clears them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessoryConfig {
    /// Before the top input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_leading: Option<Vec<KeyboardAction>>,
    /// After the top input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_trailing: Option<Vec<KeyboardAction>>,
    /// Before the middle input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_leading: Option<Vec<KeyboardAction>>,
    /// After the middle input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_trailing: Option<Vec<KeyboardAction>>,
    /// Before the lower input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_leading: Option<Vec<KeyboardAction>>,
    /// After the lower input row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_trailing: Option<Vec<KeyboardAction>>,
}

/// Default context values used by the CLI when flags are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContextDefaults {
    /// Keyboard locale
    #[serde(default)]
    pub locale: KeyboardLocale,
    /// Device orientation
    #[serde(default)]
    pub orientation: Orientation,
    /// Whether the globe key is required
    #[serde(default)]
    pub needs_input_mode_switch_key: bool,
    /// Return key flavor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_key_type: Option<ReturnKeyType>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/HamsterLayout/config.toml`
/// - macOS: `~/Library/Application Support/HamsterLayout/config.toml`
/// - Windows: `%APPDATA%\HamsterLayout\config.toml`
///
/// # Validation
///
/// - percentage widths must be within 0.0..=1.0
/// - static widths must be positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// System button widths
    #[serde(default)]
    pub widths: WidthConfig,
    /// CLI context defaults
    #[serde(default)]
    pub context: ContextDefaults,
    /// Per-locale accessory overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accessories: BTreeMap<KeyboardLocale, AccessoryConfig>,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::new());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");

        Ok(config)
    }

    /// Saves configuration to the platform config file.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = self.to_toml()?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.widths.validate()
    }

    /// Accessory overrides for a locale, if configured.
    #[must_use]
    pub fn accessories_for(&self, locale: KeyboardLocale) -> Option<&AccessoryConfig> {
        self.accessories.get(&locale)
    }
}
