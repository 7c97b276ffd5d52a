//! File, line and changelog display formatting

use std::path::Path;

use super::style::Palette;
use crate::audit::AuditEntry;

/// Format a file's contents under a heading
pub fn format_file_contents(path: &Path, contents: &str, palette: &Palette) -> String {
    let mut output = palette.info(&format!("Contents of {}:", path.display()));
    output.push('\n');
    output.push_str(contents);
    if !contents.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Format a single line the way "Show Specific Line" prints it
pub fn format_line(position: usize, text: &str, palette: &Palette) -> String {
    palette.info(&format!("Line {}: {}", position, text))
}

/// Format changelog entries, oldest first
pub fn format_audit_entries(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.to_log_line());
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Action;
    use chrono::NaiveDate;

    #[test]
    fn test_file_contents_heading() {
        let output = format_file_contents(Path::new("a.txt"), "x\ny", &Palette::plain());
        assert_eq!(output, "Contents of a.txt:\nx\ny\n");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line(3, "hello", &Palette::plain()), "Line 3: hello");
    }

    #[test]
    fn test_audit_entries() {
        assert_eq!(format_audit_entries(&[]), "No changes recorded.\n");

        let entry = AuditEntry {
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
            action: Action::Copied,
            target: "b.txt".into(),
            lines: 1,
            size_bytes: 2,
        };
        assert_eq!(
            format_audit_entries(&[entry]),
            "2024-01-02 03:04:05 | Action: Copied | File: b.txt | Lines: 1 | Size: 2 bytes\n"
        );
    }
}
