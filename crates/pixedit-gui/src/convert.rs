use pixedit_core::render::Bitmap;

/// Wrap a rendered RGBA bitmap as an egui image.
pub fn bitmap_to_color_image(bitmap: &Bitmap) -> egui::ColorImage {
    let size = [bitmap.width() as usize, bitmap.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw())
}
