//! Core data models for lineedit
//!
//! Small value types shared by the storage, service and display layers.

pub mod dir_entry;
pub mod position;

pub use dir_entry::DirEntryInfo;
pub use position::LineNumber;
