//! lineedit - console editor for text files
//!
//! This library provides whole-file and line-level editing of plain text
//! files. Every line edit is committed atomically through a scratch file in
//! the target's directory, and every successful mutation is appended to a
//! human-readable changelog.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and settings
//! - `error`: Custom error types
//! - `models`: Line positions and directory entries
//! - `storage`: Line reading and atomic file commits
//! - `audit`: Changelog recording and parsing
//! - `services`: File, line and directory operations
//! - `display`: Terminal formatting and colours
//! - `cli`: Subcommand handlers
//! - `menu`: Interactive numbered menu
//! - `logging`: Diagnostic tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use lineedit::audit::AuditLogger;
//! use lineedit::services::LineService;
//!
//! let audit = AuditLogger::new("changelog.txt".into());
//! let edit = LineService::new(&audit).insert_line("notes.txt".as_ref(), 2, "hello")?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{EditorError, EditorResult};
