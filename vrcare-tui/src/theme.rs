//! Emerald theme tokens for the VR Assurance Care TUI
//!
//! The page's palette is a soft green gradient with muted foreground text,
//! so the terminal version keeps green as the accent and uses grays for
//! secondary copy.
//!
//! # Color Palette
//! - **Accent**: Emerald (focus, active tabs, primary buttons)
//! - **Positive**: Mint (ratings, availability)
//! - **Warning**: Amber (demo notices, non-functional actions)
//! - **Neutral**: Sage (section headings, badges)
//! - **Muted**: Gray (secondary copy, placeholders)

use ratatui::style::{Color, Modifier, Style};

/// Emerald theme for the directory TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Emerald accent (focus, highlights)
    pub accent: Color,
    /// Mint (ratings, availability)
    pub positive: Color,
    /// Amber (demo notices)
    pub warning: Color,
    /// Sage (badges, headings)
    pub neutral: Color,
    /// Gray (secondary text, placeholders)
    pub muted: Color,
    /// Primary text
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::emerald()
    }
}

impl Theme {
    pub const fn emerald() -> Self {
        Self {
            accent: Color::Rgb(16, 185, 129),
            positive: Color::Rgb(110, 231, 183),
            warning: Color::Rgb(245, 158, 11),
            neutral: Color::Rgb(134, 166, 140),
            muted: Color::Rgb(140, 140, 140),
            text_primary: Color::White,
        }
    }

    /// Color for a star rating: mint at 4.8+, emerald at 4.5+, sage below.
    pub fn rating_color(&self, rating: f64) -> Color {
        match rating {
            r if r >= 4.8 => self.positive,
            r if r >= 4.5 => self.accent,
            _ => self.neutral,
        }
    }
}

const THEME: Theme = Theme::emerald();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn text_bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn rating(value: f64) -> Style {
    Style::default().fg(THEME.rating_color(value))
}

/// Selected tab / focused button.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED | Modifier::BOLD)
}

pub fn panel_border(is_focused: bool) -> Style {
    if is_focused {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(is_focused: bool) -> Style {
    if is_focused {
        accent_bold()
    } else {
        neutral()
    }
}
