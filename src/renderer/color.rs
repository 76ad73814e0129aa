//! Entity colors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fill color for an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    White,
    /// Hue in degrees, saturation/lightness in percent
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
}

impl Color {
    pub const fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        Color::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const PLAYER: Color = Color::White;
    pub const PROJECTILE: Color = Color::White;
}
