//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point color comparisons.

use cmaps::{Color, ColorTable};

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f32 = 1e-6;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f32, expected: f32, epsilon: Option<f32>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors have the same layout and approximately equal channels.
pub fn assert_color_approx_eq(actual: &Color, expected: &Color, epsilon: Option<f32>) {
    assert_eq!(
        actual.channels(),
        expected.channels(),
        "Colors have different layouts: actual = {}, expected = {}",
        actual,
        expected
    );
    for (a, e) in actual.as_slice().iter().zip(expected.as_slice()) {
        assert_approx_eq(*a, *e, epsilon);
    }
}

/// Assert that two tables hold approximately the same entries.
///
/// # Panics
///
/// Panics if the tables have different lengths or if any entry comparison fails.
pub fn assert_table_approx_eq(actual: &ColorTable, expected: &ColorTable, epsilon: Option<f32>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Tables have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_color_approx_eq(a, e, epsilon);
    }
}

/// Assert that every channel of every entry lies in [0, 1].
pub fn assert_normalized(table: &ColorTable) {
    for (i, entry) in table.iter().enumerate() {
        assert!(
            entry.as_slice().iter().all(|v| (0.0..=1.0).contains(v)),
            "Entry {} out of range: {}",
            i,
            entry
        );
    }
}
