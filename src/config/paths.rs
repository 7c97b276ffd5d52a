//! Path management for lineedit
//!
//! The changelog and settings live next to the program itself rather than in
//! the current working directory, so every session appends to the same log
//! regardless of where it was started.
//!
//! ## Path Resolution Order
//!
//! 1. `LINEEDIT_HOME` environment variable (if set)
//! 2. The directory containing the running executable

use std::path::{Path, PathBuf};

use crate::error::EditorError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "LINEEDIT_HOME";

/// File name of the append-only change log
pub const CHANGELOG_FILE: &str = "changelog.txt";

/// File name of the settings file
pub const SETTINGS_FILE: &str = "lineedit.json";

/// Manages all paths used by lineedit
#[derive(Debug, Clone)]
pub struct EditorPaths {
    /// Base directory for the changelog and settings
    base_dir: PathBuf,
}

impl EditorPaths {
    /// Create a new EditorPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the executable location cannot be determined.
    pub fn new() -> Result<Self, EditorError> {
        let base_dir = match std::env::var_os(HOME_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => executable_dir()?,
        };

        Ok(Self { base_dir })
    }

    /// Create EditorPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the change log
    pub fn changelog(&self) -> PathBuf {
        self.base_dir.join(CHANGELOG_FILE)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EditorError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EditorError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Directory of the running executable
fn executable_dir() -> Result<PathBuf, EditorError> {
    let exe = std::env::current_exe()
        .map_err(|e| EditorError::Config(format!("Could not locate executable: {}", e)))?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| EditorError::Config("Executable has no parent directory".into()))
}

/// Append `.txt` unless the name already carries that extension
pub fn ensure_txt_extension(name: &str) -> PathBuf {
    let path = PathBuf::from(name);
    let has_txt = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("txt"));

    if has_txt {
        path
    } else {
        PathBuf::from(format!("{}.txt", name))
    }
}
