//! Hamster Layout - keyboard layout composition preview
//!
//! Composes the on-screen keyboard layout for a context and prints it, either
//! as a text grid or as JSON for scripting.

use clap::{Parser, Subcommand};
use hamster_layout::cli::{ComposeArgs, ConfigArgs, ExitCode, RowsArgs};
use hamster_layout::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Hamster Layout - keyboard layout composition preview
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose the keyboard layout for a context
    Compose(ComposeArgs),
    /// Print the raw input rows for a context
    Rows(RowsArgs),
    /// Manage the configuration file
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Compose(args) => args.execute(),
        Commands::Rows(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }

    std::process::exit(ExitCode::Success.code());
}
