//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::fs;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the config file location
    Path,
    /// Display the effective configuration
    Show(ConfigShowArgs),
    /// Write the default configuration
    Init(ConfigInitArgs),
}

/// Display the effective configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Path to a config file (defaults to the platform config location)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write the default configuration
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file (defaults to the platform config location)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Path => execute_path(),
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

fn execute_path() -> CliResult<()> {
    let path = Config::config_file_path()
        .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?;
    println!("{}", path.display());
    Ok(())
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Config::load_from(path)
            }
            None => Config::load(),
        }
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let output = if self.json {
            serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
        } else {
            config
                .to_toml()
                .map_err(|e| CliError::io(format!("{e:#}")))?
        };
        println!("{}", output.trim_end());

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}")))?,
        };

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let config = Config::new();
        match &self.output {
            Some(output) => {
                if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).map_err(|e| {
                        CliError::io(format!(
                            "Failed to create directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                config.save_to(output)
            }
            None => config.save(),
        }
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        tracing::info!(path = %path.display(), "Wrote default config");
        println!("✓ Wrote default config to {}", path.display());
        Ok(())
    }
}
