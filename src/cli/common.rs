//! Shared CLI types: errors, exit codes, and context flags.

use crate::config::Config;
use crate::models::{
    KeyboardAction, KeyboardContext, KeyboardLocale, KeyboardType, Orientation, ReturnKeyType,
};
use clap::Args;
use std::fmt;
use std::path::PathBuf;

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input (unknown keyboard type, bad flag value, invalid config)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Flags describing the keyboard context to compose.
///
/// Unset flags fall back to the `[context]` section of the config file.
#[derive(Debug, Clone, Args)]
pub struct ContextArgs {
    /// Keyboard type (alphabetic[:case], numeric, symbolic, emojis, custom:<name>, grid)
    #[arg(short = 't', long = "type", value_name = "TYPE", default_value = "alphabetic")]
    pub keyboard_type: String,

    /// Keyboard locale (en, en-GB, zh-Hans)
    #[arg(short, long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Device orientation (portrait, landscape)
    #[arg(short, long, value_name = "ORIENTATION")]
    pub orientation: Option<String>,

    /// Show the globe key for switching input modes
    #[arg(long)]
    pub input_mode_switch: bool,

    /// Action shown in place of the dictation key (e.g. "keyboard:emojis")
    #[arg(long, value_name = "ACTION")]
    pub dictation: Option<String>,

    /// Return key flavor (return, done, go, search, send, next, custom:<title>)
    #[arg(long, value_name = "TYPE")]
    pub return_key: Option<String>,

    /// Path to a config file (defaults to the platform config location)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ContextArgs {
    /// Loads the config file named by `--config`, or the platform one.
    pub fn load_config(&self) -> CliResult<Config> {
        match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Config::load_from(path)
                    .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))
            }
            None => Config::load()
                .map_err(|e| CliError::validation(format!("Failed to load config: {e:#}"))),
        }
    }

    /// Builds the context snapshot from flags and config defaults.
    pub fn to_context(&self, config: &Config) -> CliResult<KeyboardContext> {
        let keyboard_type: KeyboardType = parse_flag("--type", &self.keyboard_type)?;

        let locale = match &self.locale {
            Some(value) => parse_flag::<KeyboardLocale>("--locale", value)?,
            None => config.context.locale,
        };

        let orientation = match &self.orientation {
            Some(value) => parse_flag::<Orientation>("--orientation", value)?,
            None => config.context.orientation,
        };

        let return_key_type = match &self.return_key {
            Some(value) => Some(parse_flag::<ReturnKeyType>("--return-key", value)?),
            None => config.context.return_key_type.clone(),
        };

        let dictation_replacement = self
            .dictation
            .as_deref()
            .map(|value| parse_flag::<KeyboardAction>("--dictation", value))
            .transpose()?;

        Ok(KeyboardContext {
            keyboard_type,
            locale,
            orientation,
            needs_input_mode_switch_key: self.input_mode_switch
                || config.context.needs_input_mode_switch_key,
            dictation_replacement,
            return_key_type,
        })
    }
}

/// Parses a flag value, reporting failures as validation errors.
fn parse_flag<T>(flag: &str, value: &str) -> CliResult<T>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    value
        .parse()
        .map_err(|e| CliError::validation(format!("Invalid value for {flag}: {e}")))
}
