use image::RgbImage;

/// Bitwise complement of every component (`255 - v`).
pub fn negate(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    image::imageops::invert(&mut out);
    out
}
