// File: ./src/theme.rs
// The two display themes and their resolved color palettes.
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Flips to the other theme. Applying this twice is always an identity.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "Light"),
            Theme::Dark => write!(f, "Dark"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub status: Color,

    // Deadline states
    pub due_soon: Color,
    pub overdue: Color,

    // Overlays
    pub toast_border: Color,
    pub accent: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 242),
            border: Color::Rgb(150, 150, 150),
            selection_bg: Color::Rgb(0, 110, 190),
            selection_fg: Color::Rgb(250, 250, 250),

            title: Color::Rgb(0, 90, 160),
            text: Color::Rgb(35, 35, 40),
            dimmed: Color::Rgb(130, 130, 135),
            status: Color::Rgb(0, 110, 130),

            due_soon: Color::Rgb(190, 110, 0),
            overdue: Color::Rgb(190, 40, 40),

            toast_border: Color::Rgb(190, 110, 0),
            accent: Color::Rgb(0, 110, 190),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(24, 26, 32),
            border: Color::Rgb(90, 95, 105),
            selection_bg: Color::Rgb(97, 155, 220),
            selection_fg: Color::Rgb(18, 20, 25),

            title: Color::Rgb(120, 180, 240),
            text: Color::Rgb(215, 218, 222),
            dimmed: Color::Rgb(110, 115, 125),
            status: Color::Rgb(90, 185, 195),

            due_soon: Color::Rgb(230, 165, 70),
            overdue: Color::Rgb(225, 95, 95),

            toast_border: Color::Rgb(230, 165, 70),
            accent: Color::Rgb(120, 180, 240),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_is_identity() {
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn light_is_the_default() {
        assert_eq!(Theme::default(), Theme::Light);
    }
}
