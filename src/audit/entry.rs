//! Audit entry data structures
//!
//! Defines the audited actions and the changelog line format:
//!
//! ```text
//! 2024-05-01 09:30:00 | Action: Line Inserted | File: notes.txt | Lines: 4 | Size: 31 bytes
//! ```

use std::path::Path;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::storage::line_store;

/// Timestamp layout used in the changelog (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Actions recorded in the changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Created")]
    Created,
    #[serde(rename = "Deleted")]
    Deleted,
    #[serde(rename = "Copied")]
    Copied,
    #[serde(rename = "Renamed")]
    Renamed,
    #[serde(rename = "Line Appended")]
    LineAppended,
    #[serde(rename = "Line Inserted")]
    LineInserted,
    #[serde(rename = "Line Deleted")]
    LineDeleted,
}

impl Action {
    /// Label written to the changelog
    pub fn label(self) -> &'static str {
        match self {
            Action::Created => "Created",
            Action::Deleted => "Deleted",
            Action::Copied => "Copied",
            Action::Renamed => "Renamed",
            Action::LineAppended => "Line Appended",
            Action::LineInserted => "Line Inserted",
            Action::LineDeleted => "Line Deleted",
        }
    }

    const ALL: [Action; 7] = [
        Action::Created,
        Action::Deleted,
        Action::Copied,
        Action::Renamed,
        Action::LineAppended,
        Action::LineInserted,
        Action::LineDeleted,
    ];
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.label() == s)
            .ok_or_else(|| format!("Unknown action: {}", s))
    }
}

/// A single changelog entry
///
/// Line count and size describe the target *after* the action took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action was committed (local time, whole seconds)
    pub timestamp: NaiveDateTime,

    /// What was done
    pub action: Action,

    /// The file the action applies to, as the user named it
    pub target: String,

    /// Number of lines in the target afterwards
    pub lines: usize,

    /// Size of the target in bytes afterwards
    pub size_bytes: u64,
}

impl AuditEntry {
    /// Capture an entry from the target's current state on disk
    pub fn capture(target: &Path, action: Action) -> Self {
        let now = Local::now().naive_local();
        Self {
            timestamp: now.with_nanosecond(0).unwrap_or(now),
            action,
            target: target.display().to_string(),
            lines: line_store::line_count(target).unwrap_or(0),
            size_bytes: line_store::byte_size(target),
        }
    }

    /// Format the entry as one changelog line (without terminator)
    pub fn to_log_line(&self) -> String {
        format!(
            "{} | Action: {} | File: {} | Lines: {} | Size: {} bytes",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.action,
            self.target,
            self.lines,
            self.size_bytes
        )
    }

    /// Parse one changelog line
    ///
    /// The file name is taken as everything between `File:` and the last
    /// `| Lines:` marker, so names containing `|` survive.
    pub fn parse_log_line(line: &str) -> Option<Self> {
        let (timestamp, rest) = line.split_once(" | Action: ")?;
        let (action, rest) = rest.split_once(" | File: ")?;
        let (target, rest) = rest.rsplit_once(" | Lines: ")?;
        let (lines, size) = rest.split_once(" | Size: ")?;
        let size = size.strip_suffix(" bytes")?;

        Some(Self {
            timestamp: NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).ok()?,
            action: action.parse().ok()?,
            target: target.to_string(),
            lines: lines.parse().ok()?,
            size_bytes: size.parse().ok()?,
        })
    }
}
