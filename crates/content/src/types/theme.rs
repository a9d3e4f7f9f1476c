//! Theme types for folio-tui.
//!
//! Responsibilities:
//! - Define user-selectable color themes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//!
//! Invariants:
//! - `ColorTheme` is the serializable representation; `Theme` is the
//!   runtime representation and is intentionally NOT serializable.
//! - Syntax colors are keyed by token category, not by language.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    /// Dark palette in the GitHub-dark style.
    #[default]
    GithubDark,
    Light,
    HighContrast,
    Monochrome,
}

impl ColorTheme {
    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::GithubDark => "GitHub Dark",
            Self::Light => "Light",
            Self::HighContrast => "High Contrast",
            Self::Monochrome => "Monochrome",
        }
    }

    /// Next theme in the cycle (bound to the "t" key).
    pub fn cycle_next(self) -> Self {
        match self {
            Self::GithubDark => Self::Light,
            Self::Light => Self::HighContrast,
            Self::HighContrast => Self::Monochrome,
            Self::Monochrome => Self::GithubDark,
        }
    }

    /// Parse a CLI theme name. Unrecognized names fall back to the default.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::Light,
            "high_contrast" | "high-contrast" => Self::HighContrast,
            "monochrome" => Self::Monochrome,
            _ => Self::GithubDark,
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Skill bars
    pub gauge_fill: Color,
    pub gauge_track: Color,

    // Syntax highlighting, keyed by token category
    pub syntax_keyword: Color,
    pub syntax_function: Color,
    pub syntax_type: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub syntax_comment: Color,
    pub syntax_operator: Color,
    pub syntax_punctuation: Color,
    pub syntax_decorator: Color,
    pub syntax_tag: Color,
    pub syntax_attribute: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::GithubDark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue
                title: Color::Indexed(110),
                accent: Color::Indexed(75),

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Indexed(110),

                gauge_fill: Color::Indexed(75),
                gauge_track: Color::Indexed(236),

                syntax_keyword: Color::Indexed(176),  // purple
                syntax_function: Color::Indexed(222), // yellow
                syntax_type: Color::Indexed(80),      // teal
                syntax_string: Color::Indexed(150),   // green
                syntax_number: Color::Indexed(215),   // orange
                syntax_comment: Color::Indexed(245),  // gray
                syntax_operator: Color::Indexed(210), // soft red
                syntax_punctuation: Color::White,
                syntax_decorator: Color::Indexed(218), // pink
                syntax_tag: Color::Indexed(117),       // blue
                syntax_attribute: Color::Indexed(222),
            },
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::Gray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Magenta,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,

                gauge_fill: Color::Blue,
                gauge_track: Color::Gray,

                syntax_keyword: Color::Magenta,
                syntax_function: Color::Indexed(130),
                syntax_type: Color::Indexed(30),
                syntax_string: Color::Indexed(28),
                syntax_number: Color::Indexed(166),
                syntax_comment: Color::Gray,
                syntax_operator: Color::Red,
                syntax_punctuation: Color::Black,
                syntax_decorator: Color::Indexed(162),
                syntax_tag: Color::Blue,
                syntax_attribute: Color::Indexed(130),
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Cyan,

                gauge_fill: Color::Yellow,
                gauge_track: Color::DarkGray,

                syntax_keyword: Color::Magenta,
                syntax_function: Color::Yellow,
                syntax_type: Color::Cyan,
                syntax_string: Color::Green,
                syntax_number: Color::Cyan,
                syntax_comment: Color::Gray,
                syntax_operator: Color::Red,
                syntax_punctuation: Color::White,
                syntax_decorator: Color::Magenta,
                syntax_tag: Color::Cyan,
                syntax_attribute: Color::Yellow,
            },
            ColorTheme::Monochrome => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Indexed(245),
                border: Color::Indexed(250),
                title: Color::White,
                accent: Color::Indexed(255),

                success: Color::Indexed(250),
                warning: Color::Indexed(245),
                error: Color::Indexed(255),
                info: Color::Indexed(245),

                gauge_fill: Color::Indexed(250),
                gauge_track: Color::Indexed(238),

                syntax_keyword: Color::White,
                syntax_function: Color::Indexed(250),
                syntax_type: Color::Indexed(250),
                syntax_string: Color::Indexed(245),
                syntax_number: Color::Indexed(245),
                syntax_comment: Color::Indexed(238),
                syntax_operator: Color::Indexed(250),
                syntax_punctuation: Color::Indexed(245),
                syntax_decorator: Color::Indexed(250),
                syntax_tag: Color::Indexed(250),
                syntax_attribute: Color::Indexed(245),
            },
        }
    }
}

impl From<ColorTheme> for Theme {
    fn from(value: ColorTheme) -> Self {
        Self::from_color_theme(value)
    }
}

impl Default for Theme {
    fn default() -> Self {
        ColorTheme::GithubDark.into()
    }
}
