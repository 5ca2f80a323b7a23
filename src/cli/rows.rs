//! Input rows command.

use crate::cli::common::{CliError, CliResult, ContextArgs};
use crate::models::InputSetRows;
use crate::services::LayoutService;
use clap::Args;
use serde::Serialize;

/// Print the raw input rows for a context
#[derive(Debug, Clone, Args)]
pub struct RowsArgs {
    /// Context flags
    #[command(flatten)]
    pub context: ContextArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct RowsResult {
    keyboard_type: String,
    locale: String,
    rows: InputSetRows,
}

impl RowsArgs {
    /// Execute the rows command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.context.load_config()?;
        let context = self.context.to_context(&config)?;

        let rows = LayoutService::from_config(&config).input_rows(&context);

        if self.json {
            let result = RowsResult {
                keyboard_type: context.keyboard_type.to_string(),
                locale: context.locale.to_string(),
                rows,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        if rows.is_empty() {
            println!("No input rows for {}", context.keyboard_type);
            return Ok(());
        }
        for row in &rows {
            println!("{}", row.join(" "));
        }

        Ok(())
    }
}
