//! Line-oriented read access to text files
//!
//! Files are modelled as an ordered sequence of lines. Lines are read as raw
//! bytes with an unbounded reader, so long lines are never truncated and text
//! in any 8-bit encoding can be edited. Decoding happens only where a line is
//! shown to the user.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{EditorError, EditorResult};
use crate::models::LineNumber;

/// One line as stored on disk, including its `\n` or `\r\n` terminator if any
pub type RawLine = Vec<u8>;

/// Iterator over the raw lines of a reader
struct RawLines<R> {
    reader: R,
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buf)),
            Err(e) => Some(Err(e)),
        }
    }
}

/// Check if a path exists
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// The content of a raw line without its terminator
pub fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Decode a raw line for display, replacing invalid UTF-8
pub fn decode(line: &[u8]) -> String {
    String::from_utf8_lossy(strip_terminator(line)).into_owned()
}

/// Read every line of a file with its terminator kept
pub fn read_raw_lines<P: AsRef<Path>>(path: P) -> EditorResult<Vec<RawLine>> {
    let path = path.as_ref();

    raw_lines(open_existing(path)?)
        .enumerate()
        .map(|(index, line)| line.map_err(|e| read_error(path, index + 1, e)))
        .collect()
}

/// Read every line of a file as text, stripping `\n` / `\r\n` terminators
pub fn read_lines<P: AsRef<Path>>(path: P) -> EditorResult<Vec<String>> {
    Ok(read_raw_lines(path)?.iter().map(|line| decode(line)).collect())
}

/// Read a single line, stopping as soon as it is reached
///
/// Returns `Ok(None)` when the file is shorter than `position`; use
/// [`line_count`] for the total.
pub fn read_line<P: AsRef<Path>>(path: P, position: LineNumber) -> EditorResult<Option<String>> {
    let path = path.as_ref();

    match raw_lines(open_existing(path)?).nth(position.index()) {
        Some(line) => line
            .map(|line| Some(decode(&line)))
            .map_err(|e| read_error(path, position.get(), e)),
        None => Ok(None),
    }
}

/// Number of lines in a file, `0` if it does not exist
pub fn line_count<P: AsRef<Path>>(path: P) -> EditorResult<usize> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(0);
    }

    let file = File::open(path)
        .map_err(|e| EditorError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut count = 0;
    for (index, line) in raw_lines(file).enumerate() {
        line.map_err(|e| read_error(path, index + 1, e))?;
        count += 1;
    }

    Ok(count)
}

/// Size of a file in bytes, `0` if it does not exist
pub fn byte_size<P: AsRef<Path>>(path: P) -> u64 {
    fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

fn raw_lines(file: File) -> RawLines<BufReader<File>> {
    RawLines {
        reader: BufReader::new(file),
    }
}

fn read_error(path: &Path, line: usize, e: io::Error) -> EditorError {
    EditorError::Io(format!(
        "Failed to read line {} of {}: {}",
        line,
        path.display(),
        e
    ))
}

fn open_existing(path: &Path) -> EditorResult<File> {
    if !path.exists() {
        return Err(EditorError::file_not_found(path));
    }

    File::open(path)
        .map_err(|e| EditorError::Io(format!("Failed to open {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        let err = read_lines(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_lines_strips_terminators() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixed.txt");
        fs::write(&path, "alpha\r\nbeta\ngamma").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_rejoin_reproduces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("round.txt");
        let content = "first line\n\n  indented\nlast\n";
        fs::write(&path, content).unwrap();

        let lines = read_lines(&path).unwrap();
        let mut rejoined = lines.join("\n");
        rejoined.push('\n');
        assert_eq!(rejoined, content);
    }

    #[test]
    fn test_long_lines_are_not_truncated() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("long.txt");
        let long = "x".repeat(10_000);
        fs::write(&path, format!("{}\nshort\n", long)).unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 10_000);
        assert_eq!(line_count(&path).unwrap(), 2);
    }

    #[test]
    fn test_line_count_and_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("count.txt");
        let missing = temp_dir.path().join("missing.txt");
        fs::write(&path, "a\nb\nc").unwrap();

        assert_eq!(line_count(&path).unwrap(), 3);
        assert_eq!(byte_size(&path), 5);
        assert_eq!(line_count(&missing).unwrap(), 0);
        assert_eq!(byte_size(&missing), 0);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        assert!(read_lines(&path).unwrap().is_empty());
        assert_eq!(line_count(&path).unwrap(), 0);
    }

    #[test]
    fn test_read_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lines.txt");
        fs::write(&path, "one\ntwo\nthree\n").unwrap();

        let second = read_line(&path, LineNumber::new(2).unwrap()).unwrap();
        assert_eq!(second.as_deref(), Some("two"));

        let past_end = read_line(&path, LineNumber::new(4).unwrap()).unwrap();
        assert!(past_end.is_none());
    }

    #[test]
    fn test_raw_lines_keep_terminators() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("raw.txt");
        fs::write(&path, "a\r\nb\nc").unwrap();

        let lines = read_raw_lines(&path).unwrap();
        assert_eq!(lines, vec![b"a\r\n".to_vec(), b"b\n".to_vec(), b"c".to_vec()]);
        assert_eq!(lines.concat(), fs::read(&path).unwrap());
    }

    #[test]
    fn test_non_utf8_lines_are_readable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\nb\n").unwrap();

        assert_eq!(line_count(&path).unwrap(), 2);
        assert_eq!(read_raw_lines(&path).unwrap()[0], b"caf\xe9\n".to_vec());
        assert_eq!(read_lines(&path).unwrap(), vec!["caf\u{fffd}", "b"]);

        let first = read_line(&path, LineNumber::FIRST).unwrap();
        assert_eq!(first.as_deref(), Some("caf\u{fffd}"));
    }

    #[test]
    fn test_strip_terminator() {
        assert_eq!(strip_terminator(b"x\r\n"), b"x");
        assert_eq!(strip_terminator(b"x\n"), b"x");
        assert_eq!(strip_terminator(b"x"), b"x");
        assert_eq!(strip_terminator(b"\r\n"), b"");
    }
}
