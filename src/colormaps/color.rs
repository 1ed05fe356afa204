//! Color entries stored in a color table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CmapsError, Result};

/// Channel layout shared by every entry of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channels {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl Channels {
    /// Number of channels per entry
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channels::Rgb => f.write_str("RGB"),
            Channels::Rgba => f.write_str("RGBA"),
        }
    }
}

/// A single color entry with channels normalized to [0, 1].
///
/// Serializes as a bare array (`[r, g, b]` or `[r, g, b, a]`), which is also
/// the layout of the JSON table bundles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    Rgb([f32; 3]),
    Rgba([f32; 4]),
}

impl Color {
    /// Build a color from a channel slice of length 3 or 4.
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        match *values {
            [r, g, b] => Ok(Color::Rgb([r, g, b])),
            [r, g, b, a] => Ok(Color::Rgba([r, g, b, a])),
            _ => Err(CmapsError::invalid_table(format!(
                "color entries need 3 or 4 channels, got {}",
                values.len()
            ))),
        }
    }

    /// Channel layout of this entry
    pub fn channels(&self) -> Channels {
        match self {
            Color::Rgb(_) => Channels::Rgb,
            Color::Rgba(_) => Channels::Rgba,
        }
    }

    /// Channel values in order
    pub fn as_slice(&self) -> &[f32] {
        match self {
            Color::Rgb(c) => c,
            Color::Rgba(c) => c,
        }
    }

    /// True when every channel is finite and within [0, 1]
    pub fn is_normalized(&self) -> bool {
        self.as_slice()
            .iter()
            .all(|v| v.is_finite() && (0.0..=1.0).contains(v))
    }

    /// Per-channel linear blend `self * (1 - t) + other * t`.
    ///
    /// Both colors must share a channel layout; results are clamped to [0, 1].
    pub fn lerp(&self, other: &Color, t: f32) -> Result<Color> {
        let mix = |a: f32, b: f32| (a * (1.0 - t) + b * t).clamp(0.0, 1.0);
        match (self, other) {
            (Color::Rgb(a), Color::Rgb(b)) => Ok(Color::Rgb([
                mix(a[0], b[0]),
                mix(a[1], b[1]),
                mix(a[2], b[2]),
            ])),
            (Color::Rgba(a), Color::Rgba(b)) => Ok(Color::Rgba([
                mix(a[0], b[0]),
                mix(a[1], b[1]),
                mix(a[2], b[2]),
                mix(a[3], b[3]),
            ])),
            _ => Err(CmapsError::IncompatibleTable {
                left: self.channels().to_string(),
                right: other.channels().to_string(),
            }),
        }
    }

    /// Convert to 8-bit RGBA, alpha 255 for RGB entries
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match self {
            Color::Rgb([r, g, b]) => [q(*r), q(*g), q(*b), 255],
            Color::Rgba([r, g, b, a]) => [q(*r), q(*g), q(*b), q(*a)],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.as_slice();
        write!(f, "(")?;
        for (i, v) in values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.6}", v)?;
        }
        write!(f, ")")
    }
}
