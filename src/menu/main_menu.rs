//! Numbered main menu with file and line submenus
//!
//! Failed operations are reported and the menu carries on; only the end of
//! input stops the session early.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::console::Console;
use super::explorer;
use crate::audit::AuditStatus;
use crate::cli::AppContext;
use crate::display::{format_file_contents, format_line};
use crate::error::{EditorError, EditorResult};
use crate::services::{FileService, LineService};

const HELP_TEXT: &str = "\
This program has the following features:
1. File Operations: Create, Copy, Delete, Rename, and View Files.
2. Line Operations: Append, Delete, Insert, and View Lines.
3. General Operations: View Changelog, Directory Listing, and Help.
4. Directory Management: Navigate directories and list contents.";

/// Interactive menu session
pub struct Menu<'a, R, W> {
    ctx: &'a AppContext,
    console: Console<R, W>,
    /// Directory that relative file names resolve against
    working_dir: PathBuf,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu session rooted at `working_dir`
    pub fn new(ctx: &'a AppContext, console: Console<R, W>, working_dir: PathBuf) -> Self {
        Self {
            ctx,
            console,
            working_dir,
        }
    }

    /// Directory that relative file names currently resolve against
    pub fn working_dir(&self) -> &PathBuf {
        &self.working_dir
    }

    /// Consume the menu, returning its console
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> EditorResult<()> {
        match self.main_loop() {
            Err(EditorError::InputClosed) => Ok(()),
            other => other,
        }
    }

    fn main_loop(&mut self) -> EditorResult<()> {
        let palette = self.ctx.palette;

        loop {
            self.console.say(palette.info("\nMain Menu:"))?;
            self.console.say(
                "1. File Operations\n\
                 2. Line Operations\n\
                 3. Directory Listing\n\
                 4. View Change Log\n\
                 5. Help Menu\n\
                 6. Quit",
            )?;

            let choice = self.console.prompt("Enter your Choice: ")?;
            match choice.trim() {
                "1" => self.file_menu()?,
                "2" => self.line_menu()?,
                "3" => self.explore()?,
                "4" => {
                    let result = self.show_changelog();
                    self.report(result)?;
                }
                "5" => {
                    self.console.say(palette.info("\nHelp Menu:"))?;
                    self.console.say(HELP_TEXT)?;
                }
                "6" => {
                    self.console.say(palette.success("Exiting program..."))?;
                    return Ok(());
                }
                _ => self.console.say(palette.error("Invalid Choice."))?,
            }
        }
    }

    fn file_menu(&mut self) -> EditorResult<()> {
        let palette = self.ctx.palette;

        loop {
            self.console.say(palette.info("\nFile Operations:"))?;
            self.console.say(
                "1. Create File\n\
                 2. Delete File\n\
                 3. Copy File\n\
                 4. Rename File\n\
                 5. Show File Contents\n\
                 6. Back to Main Menu",
            )?;

            let choice = self.console.prompt("Enter your choice: ")?;
            let result = match choice.trim() {
                "1" => self.create_file(),
                "2" => self.delete_file(),
                "3" => self.copy_file(),
                "4" => self.rename_file(),
                "5" => self.show_file(),
                "6" => return Ok(()),
                _ => Ok(palette.error("Invalid Choice. Please try Again.")),
            };
            self.report(result)?;
        }
    }

    fn line_menu(&mut self) -> EditorResult<()> {
        let palette = self.ctx.palette;

        loop {
            self.console.say(palette.info("\nLine Operations:"))?;
            self.console.say(
                "1. Append Line\n\
                 2. Delete Line\n\
                 3. Insert Line\n\
                 4. Show Specific Line\n\
                 5. Count Lines in File\n\
                 6. Back to Main Menu",
            )?;

            let choice = self.console.prompt("Enter your choice: ")?;
            let result = match choice.trim() {
                "1" => self.append_line(),
                "2" => self.delete_line(),
                "3" => self.insert_line(),
                "4" => self.show_line(),
                "5" => self.count_lines(),
                "6" => return Ok(()),
                _ => Ok(palette.error("Invalid Choice.")),
            };
            self.report(result)?;
        }
    }

    fn explore(&mut self) -> EditorResult<()> {
        let palette = self.ctx.palette;
        let start = self.working_dir.clone();

        self.working_dir = explorer::run(&mut self.console, &palette, start)?;
        Ok(())
    }

    /// Print an operation's message, or its error, and keep going
    fn report(&mut self, result: EditorResult<String>) -> EditorResult<()> {
        match result {
            Ok(message) => self.console.say(message),
            Err(EditorError::InputClosed) => Err(EditorError::InputClosed),
            Err(e) => {
                let message = self.ctx.palette.error(&format!("Error: {}", e));
                self.console.say(message)
            }
        }
    }

    fn ask_file(&mut self, prompt: &str) -> EditorResult<PathBuf> {
        let name = self.console.prompt(prompt)?;
        if name.trim().is_empty() {
            return Err(EditorError::Validation("File name cannot be empty".into()));
        }
        Ok(self.ctx.target_in(&self.working_dir, &name))
    }

    fn ask_position(&mut self, prompt: &str) -> EditorResult<i64> {
        let raw = self.console.prompt(prompt)?;
        raw.trim()
            .parse()
            .map_err(|_| EditorError::Validation(format!("Invalid line number: '{}'", raw.trim())))
    }

    fn with_audit(&self, message: String, status: &AuditStatus) -> String {
        match self.ctx.audit_warning(status) {
            Some(warning) => format!("{}\n{}", message, warning),
            None => message,
        }
    }

    // File operations

    fn create_file(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to create: ")?;
        let status = FileService::new(&self.ctx.audit).create(&path)?;

        let message = self
            .ctx
            .palette
            .success(&format!("File {} created successfully!", path.display()));
        Ok(self.with_audit(message, &status))
    }

    fn delete_file(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to delete: ")?;
        let status = FileService::new(&self.ctx.audit).delete(&path)?;

        let message = self
            .ctx
            .palette
            .success(&format!("File {} deleted successfully.", path.display()));
        Ok(self.with_audit(message, &status))
    }

    fn copy_file(&mut self) -> EditorResult<String> {
        let source = self.ask_file("Enter the name of the source file: ")?;
        let destination = self.ask_file("Enter the name of the destination file: ")?;
        let status = FileService::new(&self.ctx.audit).copy(&source, &destination)?;

        let message = self.ctx.palette.success(&format!(
            "File {} copied to {} successfully.",
            source.display(),
            destination.display()
        ));
        Ok(self.with_audit(message, &status))
    }

    fn rename_file(&mut self) -> EditorResult<String> {
        let old = self.ask_file("Enter the current file name: ")?;
        let new = self.ask_file("Enter the new file name: ")?;
        let status = FileService::new(&self.ctx.audit).rename(&old, &new)?;

        let message = self.ctx.palette.success(&format!(
            "File {} renamed to {} successfully.",
            old.display(),
            new.display()
        ));
        Ok(self.with_audit(message, &status))
    }

    fn show_file(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to display: ")?;
        let contents = FileService::new(&self.ctx.audit).contents(&path)?;

        let output = format_file_contents(&path, &contents, &self.ctx.palette);
        Ok(output.trim_end_matches('\n').to_string())
    }

    // Line operations

    fn append_line(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to append a line: ")?;
        let text = self.console.prompt("Enter a line to append: ")?;
        let edit = LineService::new(&self.ctx.audit).append_line(&path, &text)?;

        let message = self
            .ctx
            .palette
            .success(&format!("Line appended successfully to {}.", path.display()));
        Ok(self.with_audit(message, &edit.audit))
    }

    fn delete_line(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to delete a line: ")?;
        let position = self.ask_position("Enter the line number to delete: ")?;
        let deletion = LineService::new(&self.ctx.audit).delete_line(&path, position)?;

        let message = match deletion.removed {
            Some(_) => self.ctx.palette.success(&format!(
                "Line {} deleted successfully from {}.",
                deletion.edit.position,
                path.display()
            )),
            None => self.ctx.palette.info(&format!(
                "Line {} does not exist in {}; nothing deleted.",
                deletion.edit.position,
                path.display()
            )),
        };
        Ok(self.with_audit(message, &deletion.edit.audit))
    }

    fn insert_line(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to insert a line: ")?;
        let position = self.ask_position("Enter the line number to insert at: ")?;
        let text = self.console.prompt("Enter the line to insert: ")?;
        let edit = LineService::new(&self.ctx.audit).insert_line(&path, position, &text)?;

        let message = self.ctx.palette.success(&format!(
            "Line inserted at line {} in {} successfully.",
            edit.position,
            path.display()
        ));
        Ok(self.with_audit(message, &edit.audit))
    }

    fn show_line(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to show a specific line: ")?;
        let position = self.ask_position("Enter the line number to display: ")?;
        let line = LineService::new(&self.ctx.audit).view_line(&path, position)?;

        Ok(format_line(position as usize, &line, &self.ctx.palette))
    }

    fn count_lines(&mut self) -> EditorResult<String> {
        let path = self.ask_file("Enter the name of the file to count the number of lines: ")?;
        let count = LineService::new(&self.ctx.audit).count_lines(&path)?;

        Ok(format!("Total Lines in {}: {}", path.display(), count))
    }

    // Changelog

    /// The whole changelog exactly as stored
    fn show_changelog(&mut self) -> EditorResult<String> {
        let raw = self.ctx.audit.raw()?;

        let heading = self
            .ctx
            .palette
            .info(&format!("Change log ({}):", self.ctx.audit.path().display()));
        let body = if raw.trim().is_empty() {
            "No changes recorded."
        } else {
            raw.trim_end_matches('\n')
        };
        Ok(format!("{}\n{}", heading, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EditorPaths, Settings};
    use crate::display::Palette;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;
    use tempfile::TempDir;

    struct Fixture {
        _temp: TempDir,
        work: PathBuf,
        ctx: AppContext,
    }

    fn fixture() -> Fixture {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        let home = root.join("home");
        let work = root.join("work");
        fs::create_dir(&home).unwrap();
        fs::create_dir(&work).unwrap();

        let ctx = AppContext::new(
            EditorPaths::with_base_dir(home),
            Settings::default(),
            Palette::plain(),
        );
        Fixture {
            _temp: temp,
            work,
            ctx,
        }
    }

    fn run_menu(fx: &Fixture, input: &str) -> (String, PathBuf) {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut menu = Menu::new(&fx.ctx, console, fx.work.clone());
        menu.run().unwrap();
        let dir = menu.working_dir().clone();
        let output = String::from_utf8(menu.into_console().into_output()).unwrap();
        (output, dir)
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn test_quit() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "6\n");

        assert!(output.contains("Main Menu:"));
        assert!(output.contains("Exiting program..."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "2\n");
        assert!(output.contains("Line Operations:"));
    }

    #[test]
    fn test_invalid_choice() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "9\n6\n");
        assert!(output.contains("Invalid Choice."));
    }

    #[test]
    fn test_help() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "5\n6\n");
        assert!(output.contains("Help Menu:"));
        assert!(output.contains("Line Operations: Append, Delete, Insert, and View Lines."));
    }

    #[test]
    fn test_create_and_edit_lines() {
        let fx = fixture();
        let input = "1\n1\nnotes\n6\n\
                     2\n1\nnotes\nline one\n\
                     1\nnotes\nline three\n\
                     3\nnotes\n2\nline two\n\
                     5\nnotes\n\
                     6\n6\n";

        let (output, _) = run_menu(&fx, input);
        let path = fx.work.join("notes.txt");

        assert_eq!(read(&path), "line one\nline two\nline three\n");
        assert!(output.contains("created successfully!"));
        assert!(output.contains("Line inserted at line 2"));
        assert!(output.contains("Total Lines in"));
        assert!(output.contains(": 3"));
        assert_eq!(fx.ctx.audit.read_all().unwrap().len(), 4);
    }

    #[test]
    fn test_show_and_delete_line() {
        let fx = fixture();
        fs::write(fx.work.join("list.txt"), "a\nb\nc\n").unwrap();

        let input = "2\n4\nlist\n2\n2\nlist\n1\n6\n6\n";
        let (output, _) = run_menu(&fx, input);

        assert!(output.contains("Line 2: b"));
        assert!(output.contains("Line 1 deleted successfully"));
        assert_eq!(read(&fx.work.join("list.txt")), "b\nc\n");
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let fx = fixture();
        fs::write(fx.work.join("list.txt"), "a\n").unwrap();

        let input = "2\n4\nlist\n0\n4\nlist\n7\n4\nlist\nabc\n3\nmissing\n1\nx\n6\n6\n";
        let (output, _) = run_menu(&fx, input);

        assert!(output.contains("Error: Invalid line number: 0"));
        assert!(output.contains("Error: Line 7 does not exist. Total lines: 1"));
        assert!(output.contains("Invalid line number: 'abc'"));
        assert!(output.contains("File not found"));
        assert!(output.contains("Exiting program..."));
        assert!(!fx.work.join("missing.txt").exists());
    }

    #[test]
    fn test_copy_rename_delete() {
        let fx = fixture();
        fs::write(fx.work.join("orig.txt"), "data\n").unwrap();

        let input = "1\n3\norig\ncopy\n4\ncopy\nmoved\n2\norig\n6\n6\n";
        run_menu(&fx, input);

        assert!(!fx.work.join("orig.txt").exists());
        assert!(!fx.work.join("copy.txt").exists());
        assert_eq!(read(&fx.work.join("moved.txt")), "data\n");
    }

    #[test]
    fn test_explorer_changes_working_dir() {
        let fx = fixture();
        fs::create_dir(fx.work.join("docs")).unwrap();

        let input = "3\ndocs\nexit\n1\n1\nreadme\n6\n6\n";
        let (_, dir) = run_menu(&fx, input);

        assert_eq!(dir, fx.work.join("docs"));
        assert!(fx.work.join("docs").join("readme.txt").exists());
    }

    #[test]
    fn test_view_changelog() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "1\n1\nlogged\n6\n4\n6\n");

        assert!(output.contains("Change log ("));
        assert!(output.contains("| Action: Created | File: "));
        assert!(output.contains("logged.txt | Lines: 0 | Size: 0 bytes"));
    }

    #[test]
    fn test_changelog_is_shown_in_full() {
        let fx = fixture();
        for i in 0..30 {
            fx.ctx
                .audit
                .record(&fx.work.join(format!("f{}.txt", i)), crate::audit::Action::Created);
        }
        let mut raw = fx.ctx.audit.raw().unwrap();
        raw.push_str("hand-written note\n");
        fs::write(fx.ctx.audit.path(), raw).unwrap();

        let (output, _) = run_menu(&fx, "4\n6\n");

        assert!(output.contains("f0.txt | Lines: 0"));
        assert!(output.contains("f29.txt | Lines: 0"));
        assert!(output.contains("hand-written note"));
    }

    #[test]
    fn test_empty_changelog() {
        let fx = fixture();
        let (output, _) = run_menu(&fx, "4\n6\n");
        assert!(output.contains("No changes recorded."));
    }
}
