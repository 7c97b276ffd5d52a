//! Interactive directory explorer
//!
//! Keeps its own current directory instead of changing the process working
//! directory; the directory it ends in is handed back to the menu.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::console::Console;
use crate::display::{format_directory_listing, Palette};
use crate::error::EditorResult;
use crate::services::directory;

/// Run the explorer starting at `start`, returning the final directory
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    palette: &Palette,
    start: PathBuf,
) -> EditorResult<PathBuf> {
    let mut current = start;
    console.say(format!("Current Directory: {}", current.display()))?;

    loop {
        match directory::list_entries(&current) {
            Ok(entries) => {
                console.say("")?;
                console.write_raw(format_directory_listing(&current, &entries, palette))?;
            }
            Err(e) => console.say(palette.error(&format!("Error: {}", e)))?,
        }

        let input =
            console.prompt("\nEnter a directory name to enter, '..' to go up or 'exit' to return: ")?;
        let input = input.trim();

        if input == "exit" {
            return Ok(current);
        }

        match directory::enter(&current, input) {
            Ok(next) => {
                current = next;
                console.say(format!("Current Directory: {}", current.display()))?;
            }
            Err(e) => console.say(palette.error(&format!(
                "Error: Could not change directory to {} ({})",
                input, e
            )))?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn explore(start: PathBuf, input: &str) -> (EditorResult<PathBuf>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = run(&mut console, &Palette::plain(), start);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn test_enter_and_exit() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("docs")).unwrap();
        fs::write(root.join("docs").join("readme.txt"), "hi").unwrap();

        let (result, output) = explore(root.clone(), "docs\nexit\n");

        assert_eq!(result.unwrap(), root.join("docs"));
        assert!(output.contains("[Folder] docs"));
        assert!(output.contains("readme.txt"));
    }

    #[test]
    fn test_go_up() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("inner")).unwrap();

        let (result, _) = explore(root.join("inner"), "..\nexit\n");
        assert_eq!(result.unwrap(), root);
    }

    #[test]
    fn test_bad_directory_reports_and_stays() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        let (result, output) = explore(root.clone(), "missing\nexit\n");

        assert_eq!(result.unwrap(), root);
        assert!(output.contains("Could not change directory to missing"));
    }
}
