//! Configuration module for lineedit
//!
//! This module provides configuration management including:
//! - Executable-relative path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::{ensure_txt_extension, EditorPaths};
pub use settings::Settings;
