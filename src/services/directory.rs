//! Directory service
//!
//! Directory listing and the navigation used by the interactive explorer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EditorError, EditorResult};
use crate::models::DirEntryInfo;

/// List a directory: subdirectories first, then files, each sorted by name
pub fn list_entries(dir: &Path) -> EditorResult<Vec<DirEntryInfo>> {
    if !dir.is_dir() {
        return Err(EditorError::directory_not_found(dir));
    }

    let read_dir = fs::read_dir(dir).map_err(|e| {
        EditorError::Io(format!("Could not open directory {}: {}", dir.display(), e))
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry
            .map_err(|e| EditorError::Io(format!("Failed to read directory entry: {}", e)))?;

        // Follows symlinks so a link to a directory can be entered
        let metadata = match fs::metadata(entry.path()) {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };

        let is_directory = metadata.is_dir();
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            is_directory,
            size: if is_directory { 0 } else { metadata.len() },
        });
    }

    entries.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}

/// Resolve explorer input against the current directory
///
/// `..` moves to the parent; anything else must name an existing directory,
/// either relative to `current` or absolute.
pub fn enter(current: &Path, input: &str) -> EditorResult<PathBuf> {
    let input = input.trim();

    if input == ".." {
        return current
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| EditorError::Validation("Could not go up to the parent directory".into()));
    }

    if input.is_empty() {
        return Err(EditorError::Validation("No directory given".into()));
    }

    let candidate = current.join(input);
    if !candidate.is_dir() {
        return Err(EditorError::directory_not_found(&candidate));
    }

    candidate.canonicalize().map_err(|e| {
        EditorError::Io(format!(
            "Could not change directory to {}: {}",
            candidate.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_entries_order_and_sizes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "12345").unwrap();
        fs::write(temp.path().join("A.log"), "1").unwrap();
        fs::create_dir(temp.path().join("zeta")).unwrap();
        fs::create_dir(temp.path().join("alpha")).unwrap();

        let entries = list_entries(temp.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert_eq!(names, vec!["alpha", "zeta", "A.log", "b.txt"]);
        assert!(entries[0].is_directory);
        assert_eq!(entries[0].size, 0);
        assert_eq!(entries[3].size, 5);
        assert!(entries[3].is_text_file());
    }

    #[test]
    fn test_list_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = list_entries(&temp.path().join("nowhere")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_empty_directory() {
        let temp = TempDir::new().unwrap();
        assert!(list_entries(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn test_enter_subdirectory_and_back() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("docs")).unwrap();

        let docs = enter(&root, "docs").unwrap();
        assert_eq!(docs, root.join("docs"));

        let back = enter(&docs, "..").unwrap();
        assert_eq!(back, root);
    }

    #[test]
    fn test_enter_rejects_files_and_missing() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "").unwrap();

        assert!(enter(temp.path(), "file.txt").unwrap_err().is_not_found());
        assert!(enter(temp.path(), "missing").unwrap_err().is_not_found());
        assert!(matches!(
            enter(temp.path(), "  "),
            Err(EditorError::Validation(_))
        ));
    }

    #[test]
    fn test_enter_parent_of_root_fails() {
        let err = enter(Path::new("/"), "..").unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
    }
}
