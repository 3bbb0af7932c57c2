//! Theme configuration for CLI output
//!
//! Centralizes the color palette used by command output. Colors are
//! rendered as ANSI escape codes (see [`cli`]) and are switched off when
//! `NO_COLOR` is set or stdout is not a terminal, unless `FORCE_COLOR` is set.

use ratatui::style::Color;

pub mod cli;

pub use cli::{color_to_ansi, ANSI_RESET};

/// Theme configuration for the CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for headings and key numbers
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Whether escape codes are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            error: Color::Red,
            success: Color::LightGreen,
            enabled: true,
        }
    }
}

impl Theme {
    /// Theme that renders every helper as plain text.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Decide whether color output should be used.
fn colors_enabled() -> bool {
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Theme for the current process environment.
pub fn current_theme() -> Theme {
    if colors_enabled() {
        Theme::default()
    } else {
        Theme::plain()
    }
}
