//! Audit logging system for lineedit
//!
//! Records every committed file and line mutation in an append-only
//! changelog kept next to the executable.
//!
//! # Architecture
//!
//! - `AuditEntry`: one changelog record with timestamp, action, target and the
//!   target's resulting line count and size.
//! - `AuditLogger`: appends entries to the changelog and reads them back.
//!
//! # Example
//!
//! ```rust,ignore
//! use lineedit::audit::{Action, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.changelog());
//! let status = logger.record(Path::new("notes.txt"), Action::LineInserted);
//! if !status.is_recorded() {
//!     eprintln!("changelog unavailable");
//! }
//! ```

mod entry;
mod logger;

pub use entry::{Action, AuditEntry, TIMESTAMP_FORMAT};
pub use logger::{AuditLogger, AuditStatus};
