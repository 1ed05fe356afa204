//! Image utilities for testing.
//!
//! This module provides helper functions for inspecting rendered colorbars.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Detect image format from bytes
pub fn detect_image_format(bytes: &[u8]) -> Option<ImageFormat> {
    image::guess_format(bytes).ok()
}

/// RGBA value of one pixel
pub fn pixel(img: &DynamicImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

/// True when every row of the image is identical
pub fn rows_identical(img: &DynamicImage) -> bool {
    let (width, height) = img.dimensions();
    (0..width).all(|x| {
        let top = img.get_pixel(x, 0);
        (1..height).all(|y| img.get_pixel(x, y) == top)
    })
}
