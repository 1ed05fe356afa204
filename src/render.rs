//! Colorbar rendering.
//!
//! Draws a horizontal gradient strip for any [`Colormap`] and writes it out
//! as PNG, for previewing tables without a plotting stack.

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};
use std::path::Path;
use std::time::Instant;
use tracing::debug;

use crate::colormaps::Colormap;
use crate::error::{CmapsError, Result};
use crate::logging::{log_operation_end, log_operation_start};

/// Render a `width` x `height` colorbar.
///
/// Column `x` shows the color at `x / (width - 1)`, so the first and last
/// columns carry the colormap's end colors. Every row is identical.
pub fn colorbar(colormap: &dyn Colormap, width: u32, height: u32) -> Result<RgbaImage> {
    if width < 2 || height < 2 {
        return Err(CmapsError::invalid_argument(
            "size",
            format!("colorbar must be at least 2x2, got {}x{}", width, height),
        ));
    }

    let row: Vec<[u8; 4]> = (0..width)
        .map(|x| colormap.map_normalized(x as f32 / (width - 1) as f32))
        .collect();

    let img = ImageBuffer::from_fn(width, height, |x, _| Rgba(row[x as usize]));

    debug!(
        colormap = colormap.name(),
        width = width,
        height = height,
        "Rendered colorbar"
    );
    Ok(img)
}

/// Write an image as PNG
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let start = Instant::now();
    let details = path.display().to_string();
    log_operation_start("save_png", Some(&details));

    let result = img
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| CmapsError::ImageGeneration {
            message: format!("Failed to write {}: {}", path.display(), e),
        });

    log_operation_end("save_png", start, result.is_ok());
    result
}

/// Encode an image as PNG bytes
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CmapsError::ImageGeneration {
            message: format!("Failed to encode PNG: {}", e),
        })?;
    Ok(buffer.into_inner())
}
