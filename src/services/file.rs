//! File service
//!
//! Whole-file operations: create, delete, copy, rename and display. Each
//! checks existence before acting and confirms the result afterwards.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::audit::{Action, AuditLogger, AuditStatus};
use crate::error::{EditorError, EditorResult};
use crate::storage::line_store;

/// Service for whole-file operations
pub struct FileService<'a> {
    audit: &'a AuditLogger,
}

impl<'a> FileService<'a> {
    /// Create a new file service
    pub fn new(audit: &'a AuditLogger) -> Self {
        Self { audit }
    }

    /// Check if a file exists
    pub fn exists(&self, path: &Path) -> bool {
        line_store::exists(path)
    }

    /// Create a new empty file
    pub fn create(&self, path: &Path) -> EditorResult<AuditStatus> {
        if self.exists(path) {
            return Err(EditorError::file_exists(path));
        }

        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => EditorError::file_exists(path),
                _ => EditorError::Io(format!("Could not create file {}: {}", path.display(), e)),
            })?;

        info!(target_file = %path.display(), "file created");
        Ok(self.audit.record(path, Action::Created))
    }

    /// Delete an existing file
    pub fn delete(&self, path: &Path) -> EditorResult<AuditStatus> {
        if !self.exists(path) {
            return Err(EditorError::file_not_found(path));
        }

        fs::remove_file(path)
            .map_err(|e| EditorError::Io(format!("Could not delete file {}: {}", path.display(), e)))?;

        if self.exists(path) {
            return Err(EditorError::Io(format!(
                "File {} still exists after delete",
                path.display()
            )));
        }

        info!(target_file = %path.display(), "file deleted");
        Ok(self.audit.record(path, Action::Deleted))
    }

    /// Copy `source` to `destination`, replacing any existing destination
    pub fn copy(&self, source: &Path, destination: &Path) -> EditorResult<AuditStatus> {
        if !self.exists(source) {
            return Err(EditorError::file_not_found(source));
        }
        if same_file(source, destination)? {
            return Err(EditorError::Validation(format!(
                "{} and {} are the same file",
                source.display(),
                destination.display()
            )));
        }

        fs::copy(source, destination).map_err(|e| {
            EditorError::Io(format!(
                "Could not copy {} to {}: {}",
                source.display(),
                destination.display(),
                e
            ))
        })?;

        if !self.exists(destination) {
            return Err(EditorError::Io(format!(
                "Destination {} missing after copy",
                destination.display()
            )));
        }

        info!(source = %source.display(), destination = %destination.display(), "file copied");
        Ok(self.audit.record(destination, Action::Copied))
    }

    /// Rename `old` to `new`; `new` must not exist yet
    pub fn rename(&self, old: &Path, new: &Path) -> EditorResult<AuditStatus> {
        if !self.exists(old) {
            return Err(EditorError::file_not_found(old));
        }
        if self.exists(new) {
            return Err(EditorError::file_exists(new));
        }

        fs::rename(old, new).map_err(|e| {
            EditorError::Io(format!(
                "Could not rename {} to {}: {}",
                old.display(),
                new.display(),
                e
            ))
        })?;

        info!(from = %old.display(), to = %new.display(), "file renamed");
        Ok(self.audit.record(new, Action::Renamed))
    }

    /// Full contents of a file (invalid UTF-8 is replaced)
    pub fn contents(&self, path: &Path) -> EditorResult<String> {
        if !self.exists(path) {
            return Err(EditorError::file_not_found(path));
        }

        let bytes = fs::read(path)
            .map_err(|e| EditorError::Io(format!("Could not open file {}: {}", path.display(), e)))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Whether `destination` already names the same file as `source`
fn same_file(source: &Path, destination: &Path) -> EditorResult<bool> {
    if !destination.exists() {
        return Ok(false);
    }

    let canonical = |path: &Path| {
        fs::canonicalize(path)
            .map_err(|e| EditorError::Io(format!("Could not resolve {}: {}", path.display(), e)))
    };
    Ok(canonical(source)? == canonical(destination)?)
}
