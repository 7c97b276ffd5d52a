//! Directory CLI commands

use clap::Subcommand;
use std::path::PathBuf;

use super::AppContext;
use crate::display::format_directory_listing;
use crate::error::EditorResult;
use crate::services::directory;

/// Directory subcommands
#[derive(Subcommand)]
pub enum DirCommands {
    /// List files and folders
    List {
        /// Directory to list (defaults to the working directory)
        path: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a directory command
pub fn handle_dir_command(ctx: &AppContext, cmd: DirCommands) -> EditorResult<()> {
    match cmd {
        DirCommands::List { path, json } => {
            let dir = match path {
                Some(path) if path.is_absolute() => path,
                Some(path) => ctx.working_dir.join(path),
                None => ctx.working_dir.clone(),
            };

            let entries = directory::list_entries(&dir)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", format_directory_listing(&dir, &entries, &ctx.palette));
            }
        }
    }

    Ok(())
}
