//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dir;
pub mod file;
pub mod line;
pub mod log;

use std::path::{Component, Path, PathBuf};

pub use dir::{handle_dir_command, DirCommands};
pub use file::{handle_file_command, FileCommands};
pub use line::{handle_line_command, LineCommands};
pub use log::{handle_log_command, LogCommands};

use crate::audit::{AuditLogger, AuditStatus};
use crate::config::{ensure_txt_extension, EditorPaths, Settings};
use crate::display::Palette;

/// Everything a command needs: paths, settings, colours and the changelog
pub struct AppContext {
    pub paths: EditorPaths,
    pub settings: Settings,
    pub palette: Palette,
    pub audit: AuditLogger,
    /// Directory that file names given on the command line resolve against
    pub working_dir: PathBuf,
}

impl AppContext {
    /// Build a context whose changelog lives at `paths.changelog()`
    ///
    /// Names resolve against the process working directory; override it with
    /// [`AppContext::with_working_dir`].
    pub fn new(paths: EditorPaths, settings: Settings, palette: Palette) -> Self {
        let audit = AuditLogger::new(paths.changelog());
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            paths,
            settings,
            palette,
            audit,
            working_dir,
        }
    }

    pub fn with_working_dir(mut self, working_dir: PathBuf) -> Self {
        self.working_dir = working_dir;
        self
    }

    /// Turn a user-supplied file name into a path under the working directory
    pub fn target(&self, name: &str) -> PathBuf {
        self.target_in(&self.working_dir, name)
    }

    /// Resolve a user-supplied name against `base`, adding `.txt` if configured
    ///
    /// Both front ends go through here, so the changelog names files the same
    /// way whichever one made the change.
    pub fn target_in(&self, base: &Path, name: &str) -> PathBuf {
        let name = name.trim();
        let target = if self.settings.enforce_txt_extension {
            ensure_txt_extension(name)
        } else {
            PathBuf::from(name)
        };

        let joined = if target.is_absolute() {
            target
        } else {
            base.join(target)
        };
        joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Warning text for an edit whose changelog entry was dropped
    pub fn audit_warning(&self, status: &AuditStatus) -> Option<String> {
        match status {
            AuditStatus::Recorded => None,
            AuditStatus::Unavailable(reason) => Some(
                self.palette
                    .error(&format!("Warning: change not logged ({})", reason)),
            ),
        }
    }

    /// Print the changelog warning to stderr, if any
    pub(crate) fn report_audit(&self, status: &AuditStatus) {
        if let Some(warning) = self.audit_warning(status) {
            eprintln!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(enforce: bool) -> (TempDir, AppContext) {
        let temp = TempDir::new().unwrap();
        let paths = EditorPaths::with_base_dir(temp.path().to_path_buf());
        let mut settings = Settings::default();
        settings.enforce_txt_extension = enforce;
        let ctx = AppContext::new(paths, settings, Palette::plain())
            .with_working_dir(PathBuf::from("/work"));
        (temp, ctx)
    }

    #[test]
    fn test_target_adds_extension() {
        let (_temp, ctx) = context(true);
        assert_eq!(ctx.target(" notes "), PathBuf::from("/work/notes.txt"));
        assert_eq!(ctx.target("notes.txt"), PathBuf::from("/work/notes.txt"));
    }

    #[test]
    fn test_target_without_enforcement() {
        let (_temp, ctx) = context(false);
        assert_eq!(ctx.target("notes.md"), PathBuf::from("/work/notes.md"));
    }

    #[test]
    fn test_spellings_of_one_file_resolve_alike() {
        let (_temp, ctx) = context(true);
        let expected = PathBuf::from("/work/notes.txt");

        assert_eq!(ctx.target("./notes"), expected);
        assert_eq!(ctx.target("notes.txt"), expected);
        assert_eq!(ctx.target_in(Path::new("/work"), "./notes.txt"), expected);
        assert_eq!(ctx.target_in(Path::new("/elsewhere"), "/work/./notes"), expected);
    }

    #[test]
    fn test_target_in_base() {
        let (_temp, ctx) = context(true);
        assert_eq!(
            ctx.target_in(Path::new("/work"), "todo"),
            PathBuf::from("/work/todo.txt")
        );
        assert_eq!(
            ctx.target_in(Path::new("/work"), "/abs/todo"),
            PathBuf::from("/abs/todo.txt")
        );
    }

    #[test]
    fn test_changelog_under_base_dir() {
        let (temp, ctx) = context(true);
        assert_eq!(ctx.audit.path(), &temp.path().join("changelog.txt"));
    }

    #[test]
    fn test_audit_warning() {
        let (_temp, ctx) = context(true);
        assert!(ctx.audit_warning(&AuditStatus::Recorded).is_none());

        let warning = ctx
            .audit_warning(&AuditStatus::Unavailable("disk full".into()))
            .unwrap();
        assert!(warning.contains("disk full"));
    }
}
