//! Directory listing display
//!
//! Formats directory entries as a table with folders highlighted.

use std::path::Path;

use super::style::Palette;
use crate::models::DirEntryInfo;

const FOLDER_MARK: &str = "[Folder] ";
const FILE_MARK: &str = "         ";

/// Format a directory listing as a table
pub fn format_directory_listing(dir: &Path, entries: &[DirEntryInfo], palette: &Palette) -> String {
    let name_width = entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(9)
        .max(9);
    let type_width = 9;
    let size_width = 12;
    let total_width = FOLDER_MARK.len() + name_width + 2 + type_width + 2 + size_width;
    let rule = "-".repeat(total_width);

    let mut output = String::new();
    output.push_str(&palette.info(&format!("Directory: {}", dir.display())));
    output.push('\n');
    output.push_str(&palette.info(&rule));
    output.push('\n');

    // Header
    output.push_str(&format!(
        "{}{:<name_width$}  {:<type_width$}  {:>size_width$}\n",
        FILE_MARK,
        "File Name",
        "Type",
        "Size (bytes)",
        name_width = name_width,
        type_width = type_width,
        size_width = size_width,
    ));
    output.push_str(&palette.info(&rule));
    output.push('\n');

    if entries.is_empty() {
        output.push_str(&format!("{}(empty)\n", FILE_MARK));
    }

    for entry in entries {
        // Pad before painting so escape codes don't skew the columns
        let row = if entry.is_directory {
            format!(
                "{}{:<name_width$}  {:<type_width$}  {:>size_width$}",
                FOLDER_MARK,
                entry.name,
                "Directory",
                "N/A",
                name_width = name_width,
                type_width = type_width,
                size_width = size_width,
            )
        } else {
            format!(
                "{}{:<name_width$}  {:<type_width$}  {:>size_width$}",
                FILE_MARK,
                entry.name,
                "File",
                entry.size,
                name_width = name_width,
                type_width = type_width,
                size_width = size_width,
            )
        };

        let row = if entry.is_directory {
            palette.folder(&row)
        } else if entry.is_text_file() {
            palette.text_file(&row)
        } else {
            row
        };

        output.push_str(&row);
        output.push('\n');
    }

    output.push_str(&palette.info(&rule));
    output.push('\n');

    output
}
