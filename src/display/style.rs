//! Console colours
//!
//! `Palette` is a plain value handed to whatever prints; nothing here touches
//! global terminal state.

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};

use crate::config::Settings;

/// Colour scheme for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette that emits ANSI colours
    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// Palette that returns text unchanged
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Colour only when settings allow it, `NO_COLOR` is unset and stdout is a terminal
    pub fn detect(settings: &Settings) -> Self {
        Self::select(
            settings,
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stdout().is_terminal(),
        )
    }

    fn select(settings: &Settings, no_color: bool, terminal: bool) -> Self {
        if settings.color_output && !no_color && terminal {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Error messages (red)
    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    /// Success messages (green)
    pub fn success(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    /// Headings and informational output (yellow)
    pub fn info(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    /// Directories in listings (blue)
    pub fn folder(&self, text: &str) -> String {
        self.paint(text, Color::Blue)
    }

    /// `.txt` files in listings (cyan)
    pub fn text_file(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
