//! Line service
//!
//! The mutation engine. Every edit runs the same pipeline:
//!
//! ```text
//! Idle -> Reading -> Staging -> Committing -> Idle
//!            \          \
//!             `----------`--> Aborted (original file untouched)
//! ```
//!
//! Lines travel through the pipeline as raw bytes with their terminators, so
//! lines an edit does not touch are written back exactly as they were read.
//! The changelog is written only after the commit has succeeded, and a
//! changelog failure never undoes the edit.

use std::path::Path;

use tracing::{debug, info};

use crate::audit::{Action, AuditLogger, AuditStatus};
use crate::error::{EditorError, EditorResult};
use crate::models::LineNumber;
use crate::storage::{self, line_store, RawLine};

/// Result of a committed line mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    /// Position the edit was applied at
    pub position: LineNumber,
    /// Line count after the commit
    pub line_count: usize,
    /// Whether the changelog recorded the edit
    pub audit: AuditStatus,
}

/// Result of a delete, which may remove nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDeletion {
    pub edit: LineEdit,
    /// The removed text, `None` when the position was past the end
    pub removed: Option<String>,
}

/// Service for line-level edits
pub struct LineService<'a> {
    audit: &'a AuditLogger,
}

impl<'a> LineService<'a> {
    /// Create a new line service
    pub fn new(audit: &'a AuditLogger) -> Self {
        Self { audit }
    }

    /// Insert `text` as a new line before the line currently at `position`
    ///
    /// Positions past the last line append. Non-positive positions are
    /// rejected before the file is touched.
    pub fn insert_line(&self, path: &Path, position: i64, text: &str) -> EditorResult<LineEdit> {
        let position = LineNumber::new(position)?;

        let (_, edit) = self.mutate(path, position, Action::LineInserted, |lines| {
            insert_at(lines, position, text);
            ((), true)
        })?;

        Ok(edit)
    }

    /// Delete the line at `position`
    ///
    /// A position past the last line removes nothing and leaves the file
    /// byte-for-byte unchanged. The attempt is still recorded.
    pub fn delete_line(&self, path: &Path, position: i64) -> EditorResult<LineDeletion> {
        let position = LineNumber::new(position)?;

        let (removed, edit) = self.mutate(path, position, Action::LineDeleted, |lines| {
            let removed = remove_at(lines, position);
            let changed = removed.is_some();
            (removed.map(|line| line_store::decode(&line)), changed)
        })?;

        Ok(LineDeletion { edit, removed })
    }

    /// Return the line at `position`
    ///
    /// Read-only and not recorded in the changelog.
    pub fn view_line(&self, path: &Path, position: i64) -> EditorResult<String> {
        let position = LineNumber::new(position)?;

        match line_store::read_line(path, position)? {
            Some(line) => Ok(line),
            None => Err(EditorError::LineNotFound {
                position: position.get(),
                total: line_store::line_count(path)?,
            }),
        }
    }

    /// Append `text` as the last line, creating the file if needed
    pub fn append_line(&self, path: &Path, text: &str) -> EditorResult<LineEdit> {
        storage::append_line(path, text)?;

        let line_count = line_store::line_count(path)?;
        info!(target_file = %path.display(), line_count, "line appended");

        Ok(LineEdit {
            position: LineNumber::new(line_count as i64).unwrap_or(LineNumber::FIRST),
            line_count,
            audit: self.audit.record(path, Action::LineAppended),
        })
    }

    /// Number of lines in an existing file
    pub fn count_lines(&self, path: &Path) -> EditorResult<usize> {
        if !line_store::exists(path) {
            return Err(EditorError::file_not_found(path));
        }
        line_store::line_count(path)
    }

    /// Read, transform and atomically commit a file, then record the action
    ///
    /// `transform` reports whether it changed the lines; an unchanged file is
    /// not rewritten.
    fn mutate<T>(
        &self,
        path: &Path,
        position: LineNumber,
        action: Action,
        transform: impl FnOnce(&mut Vec<RawLine>) -> (T, bool),
    ) -> EditorResult<(T, LineEdit)> {
        debug!(target_file = %path.display(), %action, "reading");
        let mut lines = line_store::read_raw_lines(path)?;

        debug!(target_file = %path.display(), %action, "transforming");
        let (outcome, changed) = transform(&mut lines);

        if changed {
            storage::write_lines_atomic(path, &lines)?;
            info!(target_file = %path.display(), %action, %position, line_count = lines.len(), "committed");
        } else {
            info!(target_file = %path.display(), %action, %position, "nothing to commit");
        }

        let edit = LineEdit {
            position,
            line_count: lines.len(),
            audit: self.audit.record(path, action),
        };

        Ok((outcome, edit))
    }
}

/// Insert before `position`, or append when it is past the end
///
/// The new line ends in `\n`. When appending after a last line that has no
/// terminator, that line gets one so the two stay separate.
fn insert_at(lines: &mut Vec<RawLine>, position: LineNumber, text: &str) {
    let index = position.index().min(lines.len());

    if index == lines.len() {
        if let Some(last) = lines.last_mut() {
            if !last.ends_with(b"\n") {
                last.push(b'\n');
            }
        }
    }

    let mut line = text.as_bytes().to_vec();
    line.push(b'\n');
    lines.insert(index, line);
}

/// Remove the line at `position` if there is one
fn remove_at(lines: &mut Vec<RawLine>, position: LineNumber) -> Option<RawLine> {
    let index = position.index();
    (index < lines.len()).then(|| lines.remove(index))
}
