//! Grayscale height map export.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::ocean::Ocean;

/// Headroom over the first frame's peak so later, taller waves don't clip
const RANGE_HEADROOM: f64 = 1.5;

/// Height range (meters) mapped onto the full gray scale.
///
/// Derived from the current frame; falls back to 1m for a flat sea.
pub fn auto_range(ocean: &Ocean) -> f64 {
    let peak = ocean.peak_height();
    if peak > 0.0 {
        peak * RANGE_HEADROOM
    } else {
        1.0
    }
}

/// Render heights in `[-range, range]` to gray levels `0..=255`, one pixel per sample.
pub fn height_image(ocean: &Ocean, range: f64) -> GrayImage {
    let mut img = GrayImage::new(ocean.nx() as u32, ocean.ny() as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let normalized = ocean.height(x as usize, y as usize) / range;
        let gray = ((normalized + 1.0) * 127.5).clamp(0.0, 255.0) as u8;
        *pixel = Luma([gray]);
    }
    img
}

/// Write the current frame as a PNG (format inferred from the extension).
pub fn save_height_image(ocean: &Ocean, range: f64, path: &Path) -> Result<()> {
    height_image(ocean, range).save(path)?;
    Ok(())
}
