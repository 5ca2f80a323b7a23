//! Layout composition command.

use crate::cli::common::{CliError, CliResult, ContextArgs};
use crate::models::{KeyboardContext, KeyboardLayoutItem, KeyboardLayoutItemWidth};
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;

/// Compose the keyboard layout for a context
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Context flags
    #[command(flatten)]
    pub context: ContextArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ComposeResult<'a> {
    context: &'a KeyboardContext,
    rows: &'a [Vec<KeyboardLayoutItem>],
}

impl ComposeArgs {
    /// Execute the compose command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.context.load_config()?;
        let context = self.context.to_context(&config)?;

        let service = LayoutService::from_config(&config);
        let layout = service.layout(&context);

        if self.json {
            let result = ComposeResult {
                context: &context,
                rows: &layout.rows,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!(
            "Keyboard: {} ({}, {})",
            context.keyboard_type, context.locale, context.orientation
        );
        if layout.rows.is_empty() {
            println!("No rows (the host renders this keyboard type itself)");
            return Ok(());
        }
        for (index, row) in layout.rows.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(format_item).collect();
            println!("Row {index}: {}", cells.join(" "));
        }

        Ok(())
    }
}

/// Renders a cell; system actions are bracketed, non-input widths appended.
fn format_item(item: &KeyboardLayoutItem) -> String {
    let label = if item.action.is_system_action() {
        format!("[{}]", item.action.label())
    } else {
        item.action.label()
    };

    match item.width {
        KeyboardLayoutItemWidth::Input => label,
        width => format!("{label}({width})"),
    }
}
