//! Color tables and the operations on them.
//!
//! [`ColorTable`] is the value object: an immutable, named list of RGB or
//! RGBA entries. [`SegmentedColormap`] is its anchor-point form, and the
//! [`Colormap`] trait is the interface both expose to rendering code.

pub mod color;
pub mod colormap;
pub mod segment;
pub mod slice;
pub mod table;

pub use color::{Channels, Color};
pub use colormap::{Colormap, BAD_COLOR};
pub use segment::{Anchor, SegmentData, SegmentedColormap};
pub use slice::{Slice, SliceIndices};
pub use table::ColorTable;
