//! Changelog CLI commands

use clap::Subcommand;

use super::AppContext;
use crate::display::format_audit_entries;
use crate::error::EditorResult;

/// Changelog subcommands
#[derive(Subcommand)]
pub enum LogCommands {
    /// Show recent changelog entries
    Show {
        /// Number of entries to show (defaults to the configured count)
        #[arg(short, long)]
        recent: Option<usize>,
        /// Show every entry
        #[arg(short, long, conflicts_with = "recent")]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the changelog location
    Path,
}

/// Handle a changelog command
pub fn handle_log_command(ctx: &AppContext, cmd: LogCommands) -> EditorResult<()> {
    match cmd {
        LogCommands::Show { recent, all, json } => {
            let entries = if all {
                ctx.audit.read_all()?
            } else {
                let count = recent.unwrap_or(ctx.settings.recent_log_entries);
                ctx.audit.read_recent(count)?
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", format_audit_entries(&entries));
            }
        }

        LogCommands::Path => {
            println!("{}", ctx.audit.path().display());
        }
    }

    Ok(())
}
