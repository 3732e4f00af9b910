//! Colors and glyphs for the calculator screen.
//!
//! One fixed palette: pale lavender accents on dark slate, the lavender
//! picked to match a receipt card under soft light. Styles the renderer
//! needs more than once are pre-built here so the layout code stays flat.

use ratatui::style::{Color, Modifier, Style};
use std::sync::LazyLock;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent: borders with focus, brand, tip highlights
    pub lavender: Color,
    /// Text on lavender surfaces
    pub ink: Color,
    /// Screen background
    pub slate: Color,
    /// Idle borders and separators
    pub slate_light: Color,
    /// Near-white body text
    pub text_primary: Color,
    /// Labels and hints
    pub text_muted: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    /// Key names in hints and help
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            lavender: Color::Rgb(186, 171, 218),
            ink: Color::Rgb(42, 33, 66),
            slate: Color::Rgb(15, 23, 42),
            slate_light: Color::Rgb(30, 41, 59),
            text_primary: Color::Rgb(248, 250, 252),
            text_muted: Color::Rgb(148, 163, 184),
            error: Color::Rgb(239, 68, 68),
            warning: Color::Rgb(245, 158, 11),
            success: Color::Rgb(16, 185, 129),
            accent: Color::Cyan,
        }
    }
}

impl Theme {
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.lavender)
            .add_modifier(Modifier::BOLD)
    }

    pub fn subtitle(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Inverted lavender chip, for the selected control
    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(self.ink)
            .bg(self.lavender)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active(&self) -> Style {
        Style::default().fg(self.lavender)
    }

    pub fn border_inactive(&self) -> Style {
        Style::default().fg(self.slate_light)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn bg(&self) -> Style {
        Style::default().bg(self.slate)
    }

    /// The lavender banner carrying the per-person total
    pub fn headline_card(&self) -> Style {
        Style::default().fg(self.ink).bg(self.lavender)
    }

    pub fn value(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }
}

pub static THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

pub fn theme() -> &'static Theme {
    &THEME
}

/// Glyphs the renderer leans on
pub mod icons {
    pub const RECEIPT: &str = "🧾";
    pub const PEOPLE: &str = "👥";
    pub const SEPARATOR: &str = "│";

    // Slider track characters
    pub const PROGRESS_FULL: &str = "█";
    pub const PROGRESS_EMPTY: &str = "░";
    pub const SLIDER_KNOB: &str = "◉";
}
