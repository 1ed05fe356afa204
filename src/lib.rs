//! # cmaps
//!
//! Named, reusable colormaps for data visualization.
//!
//! Colormaps are loaded from static RGB definition files and exposed as
//! immutable [`ColorTable`] values that behave like sequences: they can be
//! indexed, sliced (with negative indices and steps), concatenated,
//! repeated, reversed and resampled by linear interpolation.
//!
//! ## Key Features
//!
//! - **Sequence semantics**: `slice`, `concat` (`+`), `repeat` (`*`), `get`
//! - **Resampling**: piecewise-linear `interpolate` and nearest `resampled`
//! - **Exports**: `to_list`, `to_numpy` (ndarray) and `to_segment` anchors
//! - **Registry**: name lookup with `_r` reversal and optional LUT size
//!
//! ```no_run
//! let cmap = cmaps::get_cmap("BlWhRe", Some(64), false)?;
//! let dark_half = cmap.slice(..32)?;
//! let doubled = (&dark_half * 2)?;
//! assert_eq!(doubled.len(), 64);
//! # Ok::<(), cmaps::CmapsError>(())
//! ```

pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod interpolation;
pub mod logging;
pub mod registry;
pub mod render;

pub use colormaps::{
    Anchor, Channels, Color, ColorTable, Colormap, SegmentData, SegmentedColormap, Slice,
};
pub use config::Config;
pub use error::{CmapsError, Result};
pub use logging::{
    generate_operation_id, init_tracing, log_error, log_load_stats, log_operation_end,
    log_operation_start, log_timed_operation,
};
pub use registry::{get_cmap, get_cmap_list, register, ColormapRegistry};
