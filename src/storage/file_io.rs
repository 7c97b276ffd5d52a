//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. A rewrite
//! is staged in a uniquely named scratch file beside the target and renamed
//! over it, so readers only ever see the old or the new content.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EditorError, EditorResult};

/// Name prefix of scratch files staged during a commit
pub const SCRATCH_PREFIX: &str = ".lineedit-";

/// Name suffix of scratch files staged during a commit
pub const SCRATCH_SUFFIX: &str = ".tmp";

/// Write lines to a file atomically (write to scratch, then rename)
///
/// Lines are written byte for byte, so each must carry its own terminator.
/// The scratch file is created in the target's directory so the final rename
/// never crosses filesystems, and it is removed automatically if any step
/// fails.
pub fn write_lines_atomic<P, L>(path: P, lines: &[L]) -> EditorResult<()>
where
    P: AsRef<Path>,
    L: AsRef<[u8]>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .suffix(SCRATCH_SUFFIX)
        .tempfile_in(dir)
        .map_err(|e| EditorError::Io(format!("Failed to create temporary file: {}", e)))?;

    debug!(target_file = %path.display(), scratch = %scratch.path().display(), "staging rewrite");

    {
        let mut writer = BufWriter::new(scratch.as_file_mut());
        for line in lines {
            writer
                .write_all(line.as_ref())
                .map_err(|e| EditorError::Io(format!("Failed to write temporary file: {}", e)))?;
        }
        writer
            .flush()
            .map_err(|e| EditorError::Io(format!("Failed to flush data: {}", e)))?;
    }

    // Sync to disk before rename
    scratch
        .as_file()
        .sync_all()
        .map_err(|e| EditorError::Io(format!("Failed to sync data: {}", e)))?;

    // Keep the original file's permissions; the scratch file starts out private
    if let Ok(metadata) = fs::metadata(path) {
        if let Err(e) = fs::set_permissions(scratch.path(), metadata.permissions()) {
            warn!(target_file = %path.display(), error = %e, "could not carry permissions over to rewrite");
        }
    }

    debug!(target_file = %path.display(), "committing rewrite");

    // Atomic rename; the scratch file is deleted when the error is dropped
    scratch
        .persist(path)
        .map_err(|e| EditorError::Io(format!("Failed to replace {}: {}", path.display(), e.error)))?;

    Ok(())
}

/// Append one line to the end of a file, creating it if needed
///
/// If the existing content does not end with a terminator, one is written
/// first so `text` always forms a line of its own.
pub fn append_line<P: AsRef<Path>>(path: P, text: &str) -> EditorResult<()> {
    let path = path.as_ref();

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| EditorError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let needs_terminator = ends_without_terminator(&mut file)
        .map_err(|e| EditorError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

    let mut buf = String::with_capacity(text.len() + 2);
    if needs_terminator {
        buf.push('\n');
    }
    buf.push_str(text);
    buf.push('\n');

    file.write_all(buf.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| EditorError::Io(format!("Failed to append to {}: {}", path.display(), e)))?;

    Ok(())
}

fn ends_without_terminator(file: &mut fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Check whether a file name follows the scratch naming convention
pub fn is_scratch_name(name: &str) -> bool {
    name.starts_with(SCRATCH_PREFIX) && name.ends_with(SCRATCH_SUFFIX)
}
