//! Shared test fixtures for E2E CLI and layout tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use hamster_layout::config::Config;
use hamster_layout::models::{
    KeyboardCase, KeyboardContext, KeyboardLocale, KeyboardType, Orientation,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path of the compiled CLI binary.
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_hamster-layout")
}

/// Runs the CLI with `args`, isolated from the user's config directory.
pub fn run(args: &[&str]) -> Output {
    let home = TempDir::new().unwrap();
    run_in_home(home.path(), args)
}

/// Runs the CLI with `home` standing in for the user's home directory.
pub fn run_in_home(home: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Stdout of a command as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a command as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Parses stdout as JSON.
pub fn json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Output should be valid JSON")
}

/// Writes `contents` as a config file in a temp directory.
///
/// The directory must be kept alive for as long as the file is used.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    (temp_dir, path)
}

/// Saves `config` to a temp directory.
pub fn saved_config(config: &Config) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    config.save_to(&path).unwrap();
    (temp_dir, path)
}

/// Path as a CLI argument.
pub fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

/// Every keyboard type the engine distinguishes.
pub fn all_keyboard_types() -> Vec<KeyboardType> {
    vec![
        KeyboardType::Alphabetic(KeyboardCase::Lowercased),
        KeyboardType::Alphabetic(KeyboardCase::Uppercased),
        KeyboardType::Alphabetic(KeyboardCase::CapsLocked),
        KeyboardType::Alphabetic(KeyboardCase::Auto),
        KeyboardType::Numeric,
        KeyboardType::Symbolic,
        KeyboardType::Emojis,
        KeyboardType::number_grid(),
        KeyboardType::Custom("Stroke".to_string()),
    ]
}

/// Every combination of keyboard type, locale, orientation and globe key.
pub fn all_contexts() -> Vec<KeyboardContext> {
    let mut contexts = Vec::new();
    for keyboard_type in all_keyboard_types() {
        for locale in KeyboardLocale::ALL {
            for orientation in [Orientation::Portrait, Orientation::Landscape] {
                for needs_switch_key in [false, true] {
                    contexts.push(
                        KeyboardContext::new(keyboard_type.clone())
                            .with_locale(locale)
                            .with_orientation(orientation)
                            .with_input_mode_switch_key(needs_switch_key),
                    );
                }
            }
        }
    }
    contexts
}
