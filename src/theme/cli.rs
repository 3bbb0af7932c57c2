//! ANSI color helpers and CLI text formatting
//!
//! Provides ANSI escape codes for CLI output, color conversion from
//! ratatui colors, and themed text wrappers.

use ratatui::style::Color;

use super::Theme;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

impl Theme {
    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }

    /// Format a `label: value` line with an accented value.
    pub fn field(&self, label: &str, value: impl std::fmt::Display) -> String {
        format!(
            "{} {}",
            self.secondary_text(&format!("{}:", label)),
            self.accent_text(&value.to_string())
        )
    }
}
