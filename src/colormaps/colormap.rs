//! Colormap trait and utilities.
//!
//! This module defines the common interface through which a table is handed
//! to rendering code.

use super::Color;

/// Pixel used for NaN and other non-finite values
pub const BAD_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        if !value.is_finite() {
            return BAD_COLOR;
        }
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Convert a normalized color to a pixel, using [`BAD_COLOR`] for `None`
pub(crate) fn to_pixel(color: Option<Color>) -> [u8; 4] {
    color.map(|c| c.to_rgba8()).unwrap_or(BAD_COLOR)
}
