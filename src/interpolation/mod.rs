//! Resampling algorithms for color tables.
//!
//! A color table is a list of control points evenly spaced over [0, 1].
//! An [`Interpolator`] evaluates that list at an arbitrary position.

pub mod common;
pub mod linear;
pub mod nearest;

use crate::colormaps::Color;
use crate::error::{CmapsError, Result};

pub use linear::LinearInterpolator;
pub use nearest::NearestInterpolator;

/// Trait for interpolation methods
pub trait Interpolator: Send + Sync {
    /// Evaluate the control points at position `t` in [0, 1]
    fn sample(&self, entries: &[Color], t: f64) -> Result<Color>;

    /// Evaluate the control points at `n` evenly spaced positions
    fn resample(&self, entries: &[Color], n: usize) -> Result<Vec<Color>> {
        (0..n)
            .map(|i| self.sample(entries, common::unit_position(i, n)))
            .collect()
    }

    /// Get the name of this interpolation method
    fn name(&self) -> &str;
}

/// Get an interpolator by name
pub fn get_interpolator(name: &str) -> Result<Box<dyn Interpolator>> {
    match name.to_lowercase().as_str() {
        "linear" => Ok(Box::new(LinearInterpolator)),
        "nearest" => Ok(Box::new(NearestInterpolator)),
        _ => Err(CmapsError::invalid_argument(
            "interpolation",
            format!("Unknown interpolation method: {}", name),
        )),
    }
}

pub(crate) fn ensure_not_empty(entries: &[Color]) -> Result<()> {
    if entries.is_empty() {
        return Err(CmapsError::invalid_table(
            "cannot sample an empty color table",
        ));
    }
    Ok(())
}
