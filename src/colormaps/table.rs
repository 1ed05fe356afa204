//! The color table value object.
//!
//! A [`ColorTable`] is an ordered list of RGB or RGBA entries with a name.
//! It behaves like an immutable sequence: every operation (slice, concat,
//! repeat, interpolate, reverse, ...) returns a new table and leaves the
//! receiver untouched.

use ndarray::{Array2, ArrayView2};
use serde::Serialize;
use std::fmt;
use std::ops::{Add, Index, Mul};

use super::colormap::{to_pixel, Colormap};
use super::segment::{Anchor, SegmentedColormap};
use super::slice::Slice;
use super::{Channels, Color};
use crate::error::{CmapsError, Result};
use crate::interpolation::{common, Interpolator, LinearInterpolator, NearestInterpolator};

/// A named, immutable table of colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorTable {
    name: String,
    channels: Channels,
    #[serde(rename = "colors")]
    entries: Vec<Color>,
}

impl ColorTable {
    /// Create a table from a list of entries.
    ///
    /// Fails with [`CmapsError::InvalidTable`] when `entries` is empty, when
    /// entries mix RGB and RGBA, or when a channel lies outside [0, 1].
    pub fn from_entries(entries: Vec<Color>, name: impl Into<String>) -> Result<Self> {
        let first = entries
            .first()
            .ok_or_else(|| CmapsError::invalid_table("a color table needs at least one entry"))?;
        let channels = first.channels();

        for (i, entry) in entries.iter().enumerate() {
            if entry.channels() != channels {
                return Err(CmapsError::invalid_table(format!(
                    "entry {} is {} but the table is {}",
                    i,
                    entry.channels(),
                    channels
                )));
            }
            if !entry.is_normalized() {
                return Err(CmapsError::invalid_table(format!(
                    "entry {} has channels outside [0, 1]: {}",
                    i, entry
                )));
            }
        }

        Ok(Self {
            name: name.into(),
            channels,
            entries,
        })
    }

    /// Create a table from a 2-D array with one row per entry and 3 or 4
    /// columns.
    pub fn from_array(colors: ArrayView2<f32>, name: impl Into<String>) -> Result<Self> {
        let entries = colors
            .rows()
            .into_iter()
            .map(|row| Color::from_slice(&row.to_vec()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_entries(entries, name)
    }

    /// A table sharing this table's channel layout. Entries are taken from
    /// `self`, so they are already validated.
    fn derived(&self, name: String, entries: Vec<Color>) -> Self {
        Self {
            name,
            channels: self.channels,
            entries,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the same table under another name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Number of entries (the LUT size)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Only slices that select nothing produce an empty table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Color] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.entries.iter()
    }

    /// Get a single entry. Negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<Color> {
        let len = self.entries.len();
        let normalized = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if normalized < 0 || normalized >= len as isize {
            return Err(CmapsError::IndexOutOfBounds { index, len });
        }
        Ok(self.entries[normalized as usize])
    }

    /// Select entries with sequence slice semantics.
    ///
    /// ```
    /// use cmaps::{Color, ColorTable, Slice};
    ///
    /// let gray = |v: f32| Color::Rgb([v, v, v]);
    /// let table = ColorTable::from_entries((0..5).map(|i| gray(i as f32 / 4.0)).collect(), "g")?;
    ///
    /// assert_eq!(table.slice(1..-1)?.len(), 3);
    /// assert_eq!(table.slice(Slice::new(None, None, -2))?.get(0)?, gray(1.0));
    /// # Ok::<(), cmaps::CmapsError>(())
    /// ```
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Self> {
        let entries = slice
            .into()
            .indices(self.entries.len())?
            .map(|i| self.entries[i])
            .collect();
        Ok(self.derived(format!("{}_slice", self.name), entries))
    }

    /// Append `other`'s entries after this table's entries.
    pub fn concat(&self, other: &ColorTable) -> Result<Self> {
        if self.channels != other.channels {
            return Err(CmapsError::IncompatibleTable {
                left: self.channels.to_string(),
                right: other.channels.to_string(),
            });
        }
        let mut entries = Vec::with_capacity(self.len() + other.len());
        entries.extend_from_slice(&self.entries);
        entries.extend_from_slice(&other.entries);
        Ok(self.derived(format!("{}_{}", self.name, other.name), entries))
    }

    /// Tile the whole table `n` times.
    pub fn repeat(&self, n: usize) -> Result<Self> {
        self.check_repeat_count(n)?;
        Ok(self.derived(
            format!("{}_rep({})", self.name, n),
            self.entries.repeat(n),
        ))
    }

    /// Repeat every entry `n` times in place: `[a, b]` becomes `[a, a, b, b]`
    /// for `n = 2`.
    pub fn repeat_each(&self, n: usize) -> Result<Self> {
        self.check_repeat_count(n)?;
        let entries = self
            .entries
            .iter()
            .flat_map(|c| std::iter::repeat(*c).take(n))
            .collect();
        Ok(self.derived(format!("{}_rep({})", self.name, n), entries))
    }

    /// `n` must be at least 1 and the repeated table must fit in memory
    fn check_repeat_count(&self, n: usize) -> Result<()> {
        if n < 1 {
            return Err(CmapsError::invalid_argument(
                "n",
                "repeat count must be at least 1",
            ));
        }
        let max_len = isize::MAX as usize / std::mem::size_of::<Color>();
        match self.len().checked_mul(n) {
            Some(total) if total <= max_len => Ok(()),
            _ => Err(CmapsError::invalid_argument(
                "n",
                format!("repeating {} entries {} times overflows", self.len(), n),
            )),
        }
    }

    /// Resample to `target_length` entries by piecewise-linear blending of
    /// the existing entries, treated as evenly spaced control points.
    pub fn interpolate(&self, target_length: usize) -> Result<Self> {
        if target_length < 2 {
            return Err(CmapsError::invalid_argument(
                "target_length",
                format!("must be at least 2, got {}", target_length),
            ));
        }
        let table = self.resample_with(&LinearInterpolator, target_length)?;
        Ok(table.with_name(format!("interp_{}", self.name)))
    }

    /// Resample to `lutsize` entries by listed lookup. Unlike
    /// [`interpolate`](Self::interpolate), every output is an existing entry.
    pub fn resampled(&self, lutsize: usize) -> Result<Self> {
        self.resample_with(&NearestInterpolator, lutsize)
    }

    /// Resample to `n` entries with any interpolator, keeping the name.
    pub fn resample_with(&self, interpolator: &dyn Interpolator, n: usize) -> Result<Self> {
        if n < 1 {
            return Err(CmapsError::invalid_argument("lutsize", "must be at least 1"));
        }
        let entries = interpolator.resample(&self.entries, n)?;
        Ok(self.derived(self.name.clone(), entries))
    }

    /// Package `n` evenly spaced, linearly interpolated anchors into a
    /// segmented colormap.
    pub fn to_segment(&self, n: usize) -> Result<SegmentedColormap> {
        let resampled = self.interpolate(n)?;
        let anchors = resampled
            .entries
            .into_iter()
            .enumerate()
            .map(|(i, color)| Anchor {
                position: common::unit_position(i, n) as f32,
                color,
            })
            .collect();
        SegmentedColormap::new(format!("seg_{}", self.name), anchors, n)
    }

    /// Entries as plain channel lists
    pub fn to_list(&self) -> Vec<Vec<f32>> {
        self.entries.iter().map(|c| c.as_slice().to_vec()).collect()
    }

    /// Entries as a `(len, channels)` array
    pub fn to_numpy(&self) -> Array2<f32> {
        let shape = (self.entries.len(), self.channels.count());
        Array2::from_shape_fn(shape, |(i, j)| self.entries[i].as_slice()[j])
    }

    /// Entries in reverse order, named `{name}_r`.
    pub fn reverse(&self) -> Self {
        let entries = self.entries.iter().rev().copied().collect();
        self.derived(format!("{}_r", self.name), entries)
    }
}

impl Colormap for ColorTable {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        if value.is_nan() || self.entries.is_empty() {
            return to_pixel(None);
        }
        let idx = NearestInterpolator::lookup_index(value as f64, self.entries.len());
        to_pixel(Some(self.entries[idx]))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Index<usize> for ColorTable {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.entries[index]
    }
}

impl Add<&ColorTable> for &ColorTable {
    type Output = Result<ColorTable>;

    fn add(self, other: &ColorTable) -> Result<ColorTable> {
        self.concat(other)
    }
}

impl Mul<usize> for &ColorTable {
    type Output = Result<ColorTable>;

    fn mul(self, n: usize) -> Result<ColorTable> {
        self.repeat(n)
    }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ColorTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} x {})", self.name, self.entries.len(), self.channels)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}
