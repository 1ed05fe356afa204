//! Common utilities for interpolation algorithms.
//!
//! This module provides shared functionality used by the resamplers.

/// Evenly spaced position of output sample `i` out of `n`, in [0, 1].
///
/// A single sample sits at 0.
pub fn unit_position(i: usize, n: usize) -> f64 {
    if n < 2 {
        0.0
    } else {
        i as f64 / (n - 1) as f64
    }
}

/// Real-valued index into a table of `len` control points for output
/// sample `i` out of `n`.
pub fn fractional_index(i: usize, n: usize, len: usize) -> f64 {
    unit_position(i, n) * len.saturating_sub(1) as f64
}
