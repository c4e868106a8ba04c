//! Fill colors.

use crate::random::RandomSource;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Lowest channel value for generated fill colors (avoids near-black).
pub const RANDOM_CHANNEL_MIN: f32 = 0.2;
/// Highest channel value for generated fill colors (avoids near-white).
pub const RANDOM_CHANNEL_MAX: f32 = 0.9;

/// Serializable color representation (RGBA, each channel in `0.0..=1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ShapeColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Draw an opaque color with every channel independently in
    /// `[RANDOM_CHANNEL_MIN, RANDOM_CHANNEL_MAX]`.
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let mut channel = || {
            rng.next_in_range(RANDOM_CHANNEL_MIN as f64, RANDOM_CHANNEL_MAX as f64) as f32
        };
        let r = channel();
        let g = channel();
        let b = channel();
        Self::rgb(r, g, b)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.components;
        Self { r, g, b, a }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::new([color.r, color.g, color.b, color.a])
    }
}
