use image::{Rgb, RgbImage};

use crate::config::CircleStyle;

/// Copy of `image` with a circle outline centred on `(cx, cy)`.
///
/// A pixel belongs to the outline when its distance from the centre is within
/// half the stroke width of `radius`. The centre may lie anywhere, including
/// outside the canvas; only the visible part of the outline is drawn.
pub fn draw_circle(image: &RgbImage, cx: i64, cy: i64, radius: i64, style: &CircleStyle) -> RgbImage {
    let mut out = image.clone();
    let (w, h) = (out.width() as i64, out.height() as i64);
    let half = style.stroke_width.max(1) as f64 / 2.0;
    let r = radius as f64;
    let reach = (r + half).ceil() as i64;

    let x_lo = (cx - reach).max(0);
    let x_hi = (cx + reach).min(w - 1);
    let y_lo = (cy - reach).max(0);
    let y_hi = (cy + reach).min(h - 1);
    if x_lo > x_hi || y_lo > y_hi {
        return out;
    }

    let inner = (r - half).max(0.0);
    let outer = r + half;
    let (inner_sq, outer_sq) = (inner * inner, outer * outer);
    let color = Rgb(style.color);

    for y in y_lo..=y_hi {
        let dy = (y - cy) as f64;
        for x in x_lo..=x_hi {
            let dx = (x - cx) as f64;
            let d_sq = dx * dx + dy * dy;
            if d_sq >= inner_sq && d_sq <= outer_sq {
                out.put_pixel(x as u32, y as u32, color);
            }
        }
    }
    out
}
