//! Directory listing entries

use serde::{Deserialize, Serialize};

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntryInfo {
    /// File or directory name (no parent path)
    pub name: String,
    /// Whether the entry is a directory
    pub is_directory: bool,
    /// Size in bytes (0 for directories)
    pub size: u64,
}

impl DirEntryInfo {
    /// Whether this is a plain file with a `.txt` extension
    pub fn is_text_file(&self) -> bool {
        !self.is_directory && self.name.to_ascii_lowercase().ends_with(".txt")
    }
}
