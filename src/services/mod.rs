//! Business logic layer for lineedit
//!
//! Services sit between the front ends (CLI and interactive menu) and the
//! storage layer. Services that change files take the audit logger and record
//! each committed change.

pub mod directory;
pub mod file;
pub mod line;

pub use file::FileService;
pub use line::{LineDeletion, LineEdit, LineService};
