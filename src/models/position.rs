//! 1-based line positions
//!
//! Callers hand positions over as signed integers straight from user input;
//! `LineNumber::new` is the single place where non-positive values are turned
//! into `InvalidPosition`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EditorError, EditorResult};

/// A validated 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineNumber(usize);

impl LineNumber {
    /// The first line of a file
    pub const FIRST: LineNumber = LineNumber(1);

    /// Validate a raw position
    pub fn new(position: i64) -> EditorResult<Self> {
        if position < 1 {
            return Err(EditorError::InvalidPosition(position));
        }
        usize::try_from(position)
            .map(Self)
            .map_err(|_| EditorError::InvalidPosition(position))
    }

    /// Line number as entered (1-based)
    pub fn get(self) -> usize {
        self.0
    }

    /// Index into a line sequence (0-based)
    pub fn index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
