//! Audit logger for the append-only changelog
//!
//! Provides the AuditLogger struct that writes audit entries to the changelog.
//! Each entry is written as a single text line and flushed immediately.
//! Recording never fails the caller: a changelog that cannot be written is
//! reported back as [`AuditStatus::Unavailable`].

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{EditorError, EditorResult};

use super::entry::{Action, AuditEntry};

/// Outcome of recording an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditStatus {
    /// The entry was appended to the changelog
    Recorded,
    /// The changelog could not be written; the action itself still succeeded
    Unavailable(String),
}

impl AuditStatus {
    /// Whether the entry made it into the changelog
    pub fn is_recorded(&self) -> bool {
        matches!(self, AuditStatus::Recorded)
    }
}

/// Handles writing audit entries to the changelog
pub struct AuditLogger {
    /// Path to the changelog
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Record an action against `target`'s current state
    pub fn record(&self, target: &Path, action: Action) -> AuditStatus {
        let entry = AuditEntry::capture(target, action);

        match self.log(&entry) {
            Ok(()) => {
                debug!(action = %action, target_file = %target.display(), "audit entry recorded");
                AuditStatus::Recorded
            }
            Err(e) => {
                warn!(
                    log = %self.log_path.display(),
                    error = %e,
                    "changelog unavailable, entry dropped"
                );
                AuditStatus::Unavailable(e.to_string())
            }
        }
    }

    /// Log an audit entry
    ///
    /// Appends the entry as a text line to the changelog.
    pub fn log(&self, entry: &AuditEntry) -> EditorResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| EditorError::LogUnavailable(format!("{}: {}", self.log_path.display(), e)))?;

        // Single write call so each entry lands as one append
        let line = format!("{}\n", entry.to_log_line());
        file.write_all(line.as_bytes())
            .map_err(|e| EditorError::LogUnavailable(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| EditorError::LogUnavailable(format!("Failed to flush changelog: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the changelog
    ///
    /// Returns entries in chronological order (oldest first). Lines that do
    /// not parse are skipped.
    pub fn read_all(&self) -> EditorResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| EditorError::Io(format!("Failed to open changelog: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                EditorError::Io(format!("Failed to read changelog line {}: {}", line_num + 1, e))
            })?;

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            match AuditEntry::parse_log_line(&line) {
                Some(entry) => entries.push(entry),
                None => warn!(line = line_num + 1, "skipping malformed changelog line"),
            }
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the changelog
    pub fn read_recent(&self, count: usize) -> EditorResult<Vec<AuditEntry>> {
        let mut all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries.split_off(start))
    }

    /// The changelog text exactly as stored
    pub fn raw(&self) -> EditorResult<String> {
        if !self.log_path.exists() {
            return Ok(String::new());
        }
        std::fs::read_to_string(&self.log_path)
            .map_err(|e| EditorError::Io(format!("Failed to read changelog: {}", e)))
    }

    /// Check if the changelog exists
    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    /// Get the path to the changelog
    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }
}
