//! Piecewise-linear colormaps defined by anchor points.
//!
//! A [`SegmentedColormap`] is what [`ColorTable::to_segment`] hands to
//! rendering code that builds colormaps from `(position, color)` anchors
//! rather than from a flat list.
//!
//! [`ColorTable::to_segment`]: super::ColorTable::to_segment

use serde::Serialize;

use super::colormap::{to_pixel, Colormap};
use super::{Channels, Color, ColorTable};
use crate::error::{CmapsError, Result};
use crate::interpolation::{common, NearestInterpolator};

/// A color pinned at a position in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub position: f32,
    pub color: Color,
}

/// Per-channel `(x, y0, y1)` rows.
///
/// `y0` is the value approaching `x` from the left and `y1` the value
/// leaving it to the right; they are equal for continuous maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentData {
    pub red: Vec<(f32, f32, f32)>,
    pub green: Vec<(f32, f32, f32)>,
    pub blue: Vec<(f32, f32, f32)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Vec<(f32, f32, f32)>>,
}

/// A colormap interpolating linearly between anchors
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentedColormap {
    name: String,
    anchors: Vec<Anchor>,
    lut_size: usize,
}

impl SegmentedColormap {
    /// Anchors must be sorted by position, start at 0, end at 1 and share
    /// one channel layout.
    pub fn new(name: impl Into<String>, anchors: Vec<Anchor>, lut_size: usize) -> Result<Self> {
        if anchors.len() < 2 {
            return Err(CmapsError::invalid_argument(
                "anchors",
                "a segmented colormap needs at least 2 anchors",
            ));
        }
        if lut_size < 1 {
            return Err(CmapsError::invalid_argument("lut_size", "must be at least 1"));
        }

        let channels = anchors[0].color.channels();
        if anchors.iter().any(|a| a.color.channels() != channels) {
            return Err(CmapsError::invalid_table("anchors mix RGB and RGBA colors"));
        }
        if anchors.windows(2).any(|w| w[1].position < w[0].position) {
            return Err(CmapsError::invalid_table("anchor positions must be increasing"));
        }
        let first = anchors[0].position;
        let last = anchors[anchors.len() - 1].position;
        if first != 0.0 || last != 1.0 {
            return Err(CmapsError::invalid_table(format!(
                "anchors must span [0, 1], got [{}, {}]",
                first, last
            )));
        }

        Ok(Self {
            name: name.into(),
            anchors,
            lut_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn lut_size(&self) -> usize {
        self.lut_size
    }

    pub fn channels(&self) -> Channels {
        self.anchors[0].color.channels()
    }

    /// Evaluate the map at `t`, clamped to [0, 1].
    pub fn color_at(&self, t: f32) -> Result<Color> {
        let t = t.clamp(0.0, 1.0);
        // First anchor strictly to the right of t; a zero-width segment
        // resolves to its right-hand color.
        let upper = self
            .anchors
            .partition_point(|a| a.position <= t)
            .clamp(1, self.anchors.len() - 1);
        let (a, b) = (&self.anchors[upper - 1], &self.anchors[upper]);
        let width = b.position - a.position;
        if width <= 0.0 {
            return Ok(b.color);
        }
        a.color.lerp(&b.color, (t - a.position) / width)
    }

    /// Per-channel anchor rows
    pub fn segment_data(&self) -> SegmentData {
        let column = |ch: usize| -> Vec<(f32, f32, f32)> {
            self.anchors
                .iter()
                .map(|a| {
                    let v = a.color.as_slice()[ch];
                    (a.position, v, v)
                })
                .collect()
        };
        SegmentData {
            red: column(0),
            green: column(1),
            blue: column(2),
            alpha: match self.channels() {
                Channels::Rgba => Some(column(3)),
                Channels::Rgb => None,
            },
        }
    }

    /// Sample the map into a table of `lutsize` entries.
    pub fn to_table(&self, lutsize: usize) -> Result<ColorTable> {
        if lutsize < 1 {
            return Err(CmapsError::invalid_argument("lutsize", "must be at least 1"));
        }
        let entries = (0..lutsize)
            .map(|i| self.color_at(common::unit_position(i, lutsize) as f32))
            .collect::<Result<Vec<_>>>()?;
        ColorTable::from_entries(entries, self.name.clone())
    }
}

impl Colormap for SegmentedColormap {
    /// Quantized to `lut_size` levels, like a table built with
    /// [`to_table`](SegmentedColormap::to_table).
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        if value.is_nan() {
            return to_pixel(None);
        }
        let idx = NearestInterpolator::lookup_index(value as f64, self.lut_size);
        let t = common::unit_position(idx, self.lut_size) as f32;
        to_pixel(self.color_at(t).ok())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(position: f32, v: f32) -> Anchor {
        Anchor {
            position,
            color: Color::Rgb([v, v, v]),
        }
    }

    #[test]
    fn test_new_validation() {
        assert!(SegmentedColormap::new("one", vec![anchor(0.0, 0.0)], 4).is_err());
        let gap = vec![anchor(0.1, 0.0), anchor(1.0, 1.0)];
        assert!(SegmentedColormap::new("gap", gap, 4).is_err());
        assert!(SegmentedColormap::new(
            "order",
            vec![anchor(0.0, 0.0), anchor(0.7, 0.5), anchor(0.3, 0.2), anchor(1.0, 1.0)],
            4
        )
        .is_err());
        let ends = vec![anchor(0.0, 0.0), anchor(1.0, 1.0)];
        assert!(SegmentedColormap::new("lut", ends, 0).is_err());
    }

    #[test]
    fn test_color_at() {
        let seg = SegmentedColormap::new(
            "s",
            vec![anchor(0.0, 0.0), anchor(0.25, 0.5), anchor(1.0, 1.0)],
            256,
        )
        .unwrap();
        assert_eq!(seg.color_at(0.0).unwrap(), Color::Rgb([0.0, 0.0, 0.0]));
        assert_eq!(seg.color_at(0.25).unwrap(), Color::Rgb([0.5, 0.5, 0.5]));
        assert_eq!(seg.color_at(1.0).unwrap(), Color::Rgb([1.0, 1.0, 1.0]));
        let mid = seg.color_at(0.625).unwrap();
        assert!((mid.as_slice()[0] - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_segment_data() {
        let seg = SegmentedColormap::new("s", vec![anchor(0.0, 0.2), anchor(1.0, 0.8)], 2).unwrap();
        let data = seg.segment_data();
        assert_eq!(data.red, vec![(0.0, 0.2, 0.2), (1.0, 0.8, 0.8)]);
        assert!(data.alpha.is_none());
    }

    #[test]
    fn test_to_table_round_trip_endpoints() {
        let seg = SegmentedColormap::new("s", vec![anchor(0.0, 0.0), anchor(1.0, 1.0)], 5).unwrap();
        let table = seg.to_table(5).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(2).unwrap(), Color::Rgb([0.5, 0.5, 0.5]));
    }

    #[test]
    fn test_colormap_quantizes_to_lut_size() {
        let seg = SegmentedColormap::new("s", vec![anchor(0.0, 0.0), anchor(1.0, 1.0)], 2).unwrap();
        assert_eq!(seg.map_normalized(0.3), [0, 0, 0, 255]);
        assert_eq!(seg.map_normalized(0.7), [255, 255, 255, 255]);
        assert_eq!(seg.map_normalized(f32::NAN), [0, 0, 0, 0]);
    }
}
