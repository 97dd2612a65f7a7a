#![warn(clippy::all, clippy::pedantic)]

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::components::BlockColor;

/// Visual themes, cycled in-game with `t` and persisted in the config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Neon,
    Pastel,
}

impl Theme {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Theme::Dark => Theme::Neon,
            Theme::Neon => Theme::Pastel,
            Theme::Pastel => Theme::Dark,
        }
    }

    /// Terminal color for an occupied cell of the given palette color.
    #[must_use]
    pub fn block_color(self, color: BlockColor) -> Color {
        match self {
            Theme::Dark => match color {
                BlockColor::Sky => Color::Rgb(56, 189, 248),
                BlockColor::Pink => Color::Rgb(244, 114, 182),
                BlockColor::Green => Color::Rgb(52, 211, 153),
                BlockColor::Amber => Color::Rgb(250, 204, 21),
                BlockColor::Violet => Color::Rgb(167, 139, 250),
            },
            Theme::Neon => match color {
                BlockColor::Sky => Color::Rgb(0, 229, 255),
                BlockColor::Pink => Color::Rgb(255, 0, 170),
                BlockColor::Green => Color::Rgb(57, 255, 20),
                BlockColor::Amber => Color::Rgb(255, 234, 0),
                BlockColor::Violet => Color::Rgb(191, 0, 255),
            },
            Theme::Pastel => match color {
                BlockColor::Sky => Color::Rgb(165, 216, 255),
                BlockColor::Pink => Color::Rgb(255, 198, 222),
                BlockColor::Green => Color::Rgb(178, 235, 205),
                BlockColor::Amber => Color::Rgb(250, 233, 160),
                BlockColor::Violet => Color::Rgb(214, 198, 255),
            },
        }
    }

    /// Color of the empty-grid lines.
    #[must_use]
    pub fn grid_color(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(51, 51, 51),
            Theme::Neon => Color::Rgb(40, 40, 60),
            Theme::Pastel => Color::Rgb(90, 90, 90),
        }
    }

    /// Color of the legal-placement preview under the cursor.
    #[must_use]
    pub fn preview_color(self) -> Color {
        match self {
            Theme::Dark | Theme::Neon => Color::Rgb(200, 200, 200),
            Theme::Pastel => Color::White,
        }
    }
}
