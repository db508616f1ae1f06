//! Centralized theme and color scheme for the TUI.

use ratatui::prelude::*;
use std::sync::RwLock;

/// Semantic colors used by the panes and the status line.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub text: Color,
    pub background: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,

    /// Cursor row in the focused pane
    pub cursor_fg: Color,
    pub cursor_bg: Color,
    /// Cursor row in the unfocused pane (dimmer, inverted)
    pub cursor_dim_fg: Color,
    pub cursor_dim_bg: Color,

    pub status_fg: Color,
    pub status_bg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Theme::Dark.scheme()
    }
}

/// Available themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a theme name, falling back to dark for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub const fn scheme(self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme {
                text: Color::White,
                background: Color::Reset,
                accent: Color::Yellow,
                muted: Color::DarkGray,
                border: Color::DarkGray,
                border_focused: Color::Cyan,
                cursor_fg: Color::Yellow,
                cursor_bg: Color::Blue,
                cursor_dim_fg: Color::Black,
                cursor_dim_bg: Color::Gray,
                status_fg: Color::Black,
                status_bg: Color::White,
            },
            Self::Light => ColorScheme {
                text: Color::Black,
                background: Color::Reset,
                accent: Color::Blue,
                muted: Color::Gray,
                border: Color::Gray,
                border_focused: Color::Blue,
                cursor_fg: Color::White,
                cursor_bg: Color::Blue,
                cursor_dim_fg: Color::White,
                cursor_dim_bg: Color::DarkGray,
                status_fg: Color::White,
                status_bg: Color::Black,
            },
        }
    }
}

static ACTIVE_THEME: RwLock<Theme> = RwLock::new(Theme::Dark);

/// Switch the active theme.
pub fn set_theme(theme: Theme) {
    if let Ok(mut active) = ACTIVE_THEME.write() {
        *active = theme;
    }
}

/// Colors of the active theme.
#[must_use]
pub fn colors() -> ColorScheme {
    ACTIVE_THEME
        .read()
        .map_or_else(|_| Theme::Dark.scheme(), |theme| theme.scheme())
}
