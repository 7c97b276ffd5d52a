//! Display formatting for terminal output
//!
//! Provides utilities for formatting listings, file contents and the
//! changelog, plus the colour palette used by the front ends.

pub mod directory;
pub mod file;
pub mod style;

pub use directory::format_directory_listing;
pub use file::{format_audit_entries, format_file_contents, format_line};
pub use style::Palette;
