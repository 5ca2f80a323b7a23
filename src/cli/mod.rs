//! CLI command handlers for Hamster Layout.
//!
//! Headless previews of composed layouts, for scripting and for checking a
//! config file before a host picks it up.

pub mod common;
pub mod compose;
pub mod config;
pub mod rows;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ContextArgs, ExitCode};
pub use compose::ComposeArgs;
pub use config::ConfigArgs;
pub use rows::RowsArgs;
