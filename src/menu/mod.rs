//! Interactive numbered menu
//!
//! The menu reads choices line by line from any `BufRead` and writes prompts
//! to any `Write`, so the same loop runs on a terminal or in tests.

pub mod console;
pub mod explorer;
mod main_menu;

use std::io;

pub use console::Console;
pub use main_menu::Menu;

use crate::cli::AppContext;
use crate::error::EditorResult;

/// Run the menu on stdin/stdout, starting in the context's working directory
pub fn run_interactive(ctx: &AppContext) -> EditorResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let console = Console::new(stdin.lock(), stdout.lock());

    Menu::new(ctx, console, ctx.working_dir.clone()).run()
}
