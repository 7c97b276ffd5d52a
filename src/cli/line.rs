//! Line CLI commands
//!
//! Implements CLI commands for line-level edits.

use clap::Subcommand;

use super::AppContext;
use crate::display::format_line;
use crate::error::EditorResult;
use crate::services::LineService;

/// Line subcommands
#[derive(Subcommand)]
pub enum LineCommands {
    /// Append a line to the end of a file
    Append {
        /// File name (".txt" is added if missing)
        name: String,
        /// Text of the new line
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Insert a line before the given line number
    Insert {
        /// File name
        name: String,
        /// Line number (1-based); past the end appends
        #[arg(allow_negative_numbers = true)]
        position: i64,
        /// Text of the new line
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Delete the line at the given line number
    Delete {
        /// File name
        name: String,
        /// Line number (1-based)
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
    /// Show a specific line
    Show {
        /// File name
        name: String,
        /// Line number (1-based)
        #[arg(allow_negative_numbers = true)]
        position: i64,
    },
    /// Count the lines in a file
    Count {
        /// File name
        name: String,
    },
}

/// Handle a line command
pub fn handle_line_command(ctx: &AppContext, cmd: LineCommands) -> EditorResult<()> {
    let service = LineService::new(&ctx.audit);
    let palette = &ctx.palette;

    match cmd {
        LineCommands::Append { name, text } => {
            let path = ctx.target(&name);
            let edit = service.append_line(&path, &text)?;
            println!(
                "{}",
                palette.success(&format!("Line appended successfully to {}.", path.display()))
            );
            ctx.report_audit(&edit.audit);
        }

        LineCommands::Insert {
            name,
            position,
            text,
        } => {
            let path = ctx.target(&name);
            let edit = service.insert_line(&path, position, &text)?;
            println!(
                "{}",
                palette.success(&format!(
                    "Line inserted at line {} in {} successfully.",
                    edit.position,
                    path.display()
                ))
            );
            ctx.report_audit(&edit.audit);
        }

        LineCommands::Delete { name, position } => {
            let path = ctx.target(&name);
            let deletion = service.delete_line(&path, position)?;
            match deletion.removed {
                Some(_) => println!(
                    "{}",
                    palette.success(&format!(
                        "Line {} deleted successfully from {}.",
                        deletion.edit.position,
                        path.display()
                    ))
                ),
                None => println!(
                    "{}",
                    palette.info(&format!(
                        "Line {} does not exist in {}; nothing deleted.",
                        deletion.edit.position,
                        path.display()
                    ))
                ),
            }
            ctx.report_audit(&deletion.edit.audit);
        }

        LineCommands::Show { name, position } => {
            let path = ctx.target(&name);
            let line = service.view_line(&path, position)?;
            println!("{}", format_line(position as usize, &line, palette));
        }

        LineCommands::Count { name } => {
            let path = ctx.target(&name);
            let count = service.count_lines(&path)?;
            println!("Total Lines in {}: {}", path.display(), count);
        }
    }

    Ok(())
}
