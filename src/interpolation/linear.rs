//! Piecewise-linear interpolation.
//!
//! The control points are blended channel by channel in RGB space. For a
//! position `t`, the real-valued index is `p = t * (len - 1)`; the result
//! mixes `entries[floor(p)]` and the next entry by `p - floor(p)`.

use super::{common, ensure_not_empty, Interpolator};
use crate::colormaps::Color;
use crate::error::Result;

/// Linear interpolator
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn sample(&self, entries: &[Color], t: f64) -> Result<Color> {
        ensure_not_empty(entries)?;
        let last = entries.len() - 1;
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let p = t * last as f64;
        let lo = p.floor() as usize;
        let hi = (lo + 1).min(last);
        entries[lo].lerp(&entries[hi], (p - lo as f64) as f32)
    }

    fn resample(&self, entries: &[Color], n: usize) -> Result<Vec<Color>> {
        ensure_not_empty(entries)?;
        let last = entries.len() - 1;
        (0..n)
            .map(|i| {
                let p = common::fractional_index(i, n, entries.len());
                let lo = (p.floor() as usize).min(last);
                let hi = (lo + 1).min(last);
                entries[lo].lerp(&entries[hi], (p - lo as f64) as f32)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "linear"
    }
}
