//! File storage layer for lineedit
//!
//! `line_store` reads text files as line sequences; `file_io` writes them back
//! through an atomic scratch-and-rename commit.

pub mod file_io;
pub mod line_store;

pub use file_io::{append_line, write_lines_atomic};
pub use line_store::{
    byte_size, decode, exists, line_count, read_line, read_lines, read_raw_lines, RawLine,
};
