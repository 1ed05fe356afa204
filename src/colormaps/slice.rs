//! Sequence-style slice bounds.
//!
//! A [`Slice`] carries optional `start`/`stop` bounds and a signed step.
//! [`Slice::indices`] resolves it against a length the way ordinary
//! sequence slicing does: negative bounds count from the end, omitted bounds
//! cover the whole range in the step's direction, and out-of-range bounds
//! clamp instead of failing.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::{CmapsError, Result};

/// Slice bounds: `start:stop:step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Slice {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// The whole sequence, reversed (`::-1`)
    pub fn reversed() -> Self {
        Self::new(None, None, -1)
    }

    /// Replace the step, keeping the bounds
    pub fn step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    /// Resolve the slice against a sequence of length `len`.
    ///
    /// Returns the selected positions in selection order. Fails only when
    /// the step is zero.
    pub fn indices(&self, len: usize) -> Result<SliceIndices> {
        if self.step == 0 {
            return Err(CmapsError::invalid_argument(
                "step",
                "slice step cannot be zero",
            ));
        }

        let len = len as isize;
        let step = self.step;

        // -1 is the "before the first element" sentinel for negative steps
        let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };

        let clamp = |bound: isize| {
            if bound < 0 {
                (bound + len).max(lower)
            } else {
                bound.min(upper)
            }
        };

        let start = match self.start {
            Some(s) => clamp(s),
            None if step < 0 => upper,
            None => lower,
        };
        let stop = match self.stop {
            Some(s) => clamp(s),
            None if step < 0 => lower,
            None => upper,
        };

        // Bounds lie in [-1, len]; the stride is unsigned so isize::MIN is valid
        let stride = step.unsigned_abs();
        let remaining = if step > 0 && start < stop {
            (stop - start - 1) as usize / stride + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) as usize / stride + 1
        } else {
            0
        };

        Ok(SliceIndices {
            next: start,
            step,
            remaining,
        })
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::new(None, None, 1)
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::default()
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), 1)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, 1)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), 1)
    }
}

/// Iterator over the positions selected by a [`Slice`]
#[derive(Debug, Clone)]
pub struct SliceIndices {
    next: isize,
    step: isize,
    remaining: usize,
}

impl Iterator for SliceIndices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += self.step;
        }
        Some(current as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SliceIndices {}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(start: Option<isize>, stop: Option<isize>, step: isize, len: usize) -> Vec<usize> {
        Slice::new(start, stop, step).indices(len).unwrap().collect()
    }

    #[test]
    fn test_full_ranges() {
        assert_eq!(idx(None, None, 1, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(idx(None, None, -1, 5), vec![4, 3, 2, 1, 0]);
        assert_eq!(idx(None, None, 2, 5), vec![0, 2, 4]);
        assert_eq!(idx(None, None, -2, 5), vec![4, 2, 0]);
        assert_eq!(idx(None, None, 3, 5), vec![0, 3]);
    }

    #[test]
    fn test_negative_bounds() {
        assert_eq!(idx(Some(1), Some(-1), 1, 5), vec![1, 2, 3]);
        assert_eq!(idx(Some(-2), None, 1, 5), vec![3, 4]);
        assert_eq!(idx(None, Some(-3), 1, 5), vec![0, 1]);
        assert_eq!(idx(Some(-1), Some(-4), -1, 5), vec![4, 3, 2]);
        assert_eq!(idx(Some(-1), None, -1, 5), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_out_of_range_bounds_clamp() {
        assert_eq!(idx(Some(-100), Some(100), 1, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(idx(Some(100), Some(-100), -1, 5), vec![4, 3, 2, 1, 0]);
        assert_eq!(idx(Some(3), Some(100), 1, 5), vec![3, 4]);
        assert_eq!(idx(Some(100), None, 1, 5), Vec::<usize>::new());
        assert_eq!(idx(None, Some(-100), -1, 5), vec![4, 3, 2, 1, 0]);
        assert_eq!(idx(Some(-100), None, -1, 5), Vec::<usize>::new());
    }

    #[test]
    fn test_empty_ranges() {
        assert!(idx(Some(3), Some(1), 1, 5).is_empty());
        assert!(idx(Some(1), Some(3), -1, 5).is_empty());
        assert!(idx(Some(2), Some(2), 1, 5).is_empty());
        assert!(idx(Some(2), Some(2), -1, 5).is_empty());
        assert!(idx(None, None, 1, 0).is_empty());
        assert!(idx(None, None, -1, 0).is_empty());
    }

    #[test]
    fn test_single_element_ranges() {
        assert_eq!(idx(Some(2), Some(3), 1, 5), vec![2]);
        assert_eq!(idx(Some(2), Some(1), -1, 5), vec![2]);
        assert_eq!(idx(Some(0), Some(5), 10, 5), vec![0]);
        assert_eq!(idx(Some(4), None, -10, 5), vec![4]);
        assert_eq!(idx(None, None, 1, 1), vec![0]);
        assert_eq!(idx(None, None, -1, 1), vec![0]);
    }

    #[test]
    fn test_step_reversing_direction() {
        assert_eq!(idx(Some(100), Some(10), -2, 128).len(), 45);
        assert_eq!(idx(Some(10), Some(100), 4, 128).len(), 23);
        assert_eq!(idx(Some(4), Some(0), -1, 5), vec![4, 3, 2, 1]);
        assert_eq!(idx(Some(0), Some(4), -1, 5), Vec::<usize>::new());
    }

    #[test]
    fn test_extreme_steps() {
        assert_eq!(idx(None, None, isize::MIN, 5), vec![4]);
        assert_eq!(idx(None, None, isize::MAX, 5), vec![0]);
        assert_eq!(idx(Some(4), None, isize::MAX, 5), vec![4]);
        assert_eq!(idx(Some(0), None, isize::MIN, 5), vec![0]);
        assert_eq!(idx(Some(-100), Some(100), isize::MAX, 5), vec![0]);
        assert!(idx(Some(0), Some(4), isize::MIN, 5).is_empty());
    }

    #[test]
    fn test_zero_step_fails() {
        let err = Slice::new(None, None, 0).indices(5).unwrap_err();
        assert!(matches!(err, CmapsError::InvalidArgument { .. }));
        assert!(Slice::new(Some(1), Some(2), 0).indices(0).is_err());
    }

    #[test]
    fn test_range_conversions() {
        assert_eq!(Slice::from(..), Slice::new(None, None, 1));
        assert_eq!(Slice::from(1..-1), Slice::new(Some(1), Some(-1), 1));
        assert_eq!(Slice::from(2..), Slice::new(Some(2), None, 1));
        assert_eq!(Slice::from(..3).step(-1), Slice::new(None, Some(3), -1));
        assert_eq!(Slice::reversed(), Slice::new(None, None, -1));
    }

    #[test]
    fn test_exact_size() {
        let it = Slice::new(Some(1), None, 2).indices(10).unwrap();
        assert_eq!(it.len(), 5);
    }
}
