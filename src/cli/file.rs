//! File CLI commands
//!
//! Implements CLI commands for whole-file operations.

use clap::Subcommand;

use super::AppContext;
use crate::display::format_file_contents;
use crate::error::EditorResult;
use crate::services::FileService;

/// File subcommands
#[derive(Subcommand)]
pub enum FileCommands {
    /// Create a new empty file
    Create {
        /// File name (".txt" is added if missing)
        name: String,
    },
    /// Delete a file
    Delete {
        /// File name
        name: String,
    },
    /// Copy a file
    Copy {
        /// Source file name
        source: String,
        /// Destination file name
        destination: String,
    },
    /// Rename a file
    Rename {
        /// Current file name
        old: String,
        /// New file name
        new: String,
    },
    /// Show the contents of a file
    Show {
        /// File name
        name: String,
    },
}

/// Handle a file command
pub fn handle_file_command(ctx: &AppContext, cmd: FileCommands) -> EditorResult<()> {
    let service = FileService::new(&ctx.audit);
    let palette = &ctx.palette;

    match cmd {
        FileCommands::Create { name } => {
            let path = ctx.target(&name);
            let status = service.create(&path)?;
            println!(
                "{}",
                palette.success(&format!("File {} created successfully!", path.display()))
            );
            ctx.report_audit(&status);
        }

        FileCommands::Delete { name } => {
            let path = ctx.target(&name);
            let status = service.delete(&path)?;
            println!(
                "{}",
                palette.success(&format!("File {} deleted successfully.", path.display()))
            );
            ctx.report_audit(&status);
        }

        FileCommands::Copy {
            source,
            destination,
        } => {
            let source = ctx.target(&source);
            let destination = ctx.target(&destination);
            let status = service.copy(&source, &destination)?;
            println!(
                "{}",
                palette.success(&format!(
                    "File {} copied to {} successfully.",
                    source.display(),
                    destination.display()
                ))
            );
            ctx.report_audit(&status);
        }

        FileCommands::Rename { old, new } => {
            let old = ctx.target(&old);
            let new = ctx.target(&new);
            let status = service.rename(&old, &new)?;
            println!(
                "{}",
                palette.success(&format!(
                    "File {} renamed to {} successfully.",
                    old.display(),
                    new.display()
                ))
            );
            ctx.report_audit(&status);
        }

        FileCommands::Show { name } => {
            let path = ctx.target(&name);
            let contents = service.contents(&path)?;
            print!("{}", format_file_contents(&path, &contents, palette));
        }
    }

    Ok(())
}
