use image::{imageops, DynamicImage, RgbImage, RgbaImage};
use tracing::debug;

use crate::config::Resample;

/// Display-ready pixels in the surface's channel order (RGBA, opaque).
pub type Bitmap = RgbaImage;

/// Size of `(width, height)` scaled by `percent / 100`, rounding halves up.
/// Each side is at least one pixel.
pub fn scaled_dimensions(width: u32, height: u32, percent: u32) -> (u32, u32) {
    let scale = |side: u32| -> u32 {
        let scaled = (side as u64 * percent as u64 + 50) / 100;
        scaled.clamp(1, u32::MAX as u64) as u32
    };
    (scale(width), scale(height))
}

/// Resize `image` by `percent` and convert it for display.
pub fn render(image: &RgbImage, percent: u32, resample: Resample) -> Bitmap {
    let (w, h) = image.dimensions();
    let (new_w, new_h) = scaled_dimensions(w, h, percent);

    let resized = if (new_w, new_h) == (w, h) {
        image.clone()
    } else {
        imageops::resize(image, new_w, new_h, resample.filter())
    };
    debug!(width = new_w, height = new_h, percent, "Rendered bitmap");

    DynamicImage::ImageRgb8(resized).into_rgba8()
}
