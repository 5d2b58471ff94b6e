use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::consts::IMAGE_EXTENSIONS;
use crate::error::{PixeditError, Result};

/// Decode an image file into 8-bit RGB.
///
/// Any alpha channel is dropped and higher bit depths are reduced to 8 bits.
pub fn load_from_path(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|source| PixeditError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.into_rgb8();
    info!(
        path = %path.display(),
        width = rgb.width(),
        height = rgb.height(),
        "Image decoded"
    );
    Ok(rgb)
}

/// Whether the open dialog's image filter would list this path.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
