//! Nearest lookup.
//!
//! This is the lookup a listed colormap performs: position `t` selects entry
//! `floor(t * len)`, clamped to the last entry. No blending takes place, so
//! every output is one of the existing entries.

use super::{ensure_not_empty, Interpolator};
use crate::colormaps::Color;
use crate::error::Result;

/// Nearest lookup interpolator
pub struct NearestInterpolator;

impl NearestInterpolator {
    /// Index selected for position `t` in a table of `len` entries
    pub fn lookup_index(t: f64, len: usize) -> usize {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        ((t * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

impl Interpolator for NearestInterpolator {
    fn sample(&self, entries: &[Color], t: f64) -> Result<Color> {
        ensure_not_empty(entries)?;
        Ok(entries[Self::lookup_index(t, entries.len())])
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
