use image::{Rgb, RgbImage};

/// Rotate `image` by `degrees` about its centre, keeping the original canvas.
///
/// Positive angles rotate counter-clockwise on screen. Corners that leave the
/// canvas are cropped and uncovered area is filled with black. The centre is
/// `(width / 2, height / 2)` in integer pixel coordinates. Sampling is bilinear.
pub fn rotate_about_center(image: &RgbImage, degrees: f64) -> RgbImage {
    let (w, h) = image.dimensions();
    let (sin, cos) = sin_cos_degrees(degrees);
    let cx = (w / 2) as f64;
    let cy = (h / 2) as f64;

    RgbImage::from_fn(w, h, |x, y| {
        let dx = x as f64 - cx;
        let dy = y as f64 - cy;
        // Inverse of the forward map [[cos, sin], [-sin, cos]].
        let sx = cos * dx - sin * dy + cx;
        let sy = sin * dx + cos * dy + cy;
        sample_bilinear(image, sx, sy)
    })
}

/// `(sin, cos)` of an angle in degrees, exact at multiples of 90.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}

fn sample_bilinear(image: &RgbImage, sx: f64, sy: f64) -> Rgb<u8> {
    let x0 = sx.floor();
    let y0 = sy.floor();
    let fx = sx - x0;
    let fy = sy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0.0f64; 3];
    let taps = [
        (x0, y0, (1.0 - fx) * (1.0 - fy)),
        (x0 + 1, y0, fx * (1.0 - fy)),
        (x0, y0 + 1, (1.0 - fx) * fy),
        (x0 + 1, y0 + 1, fx * fy),
    ];
    for (px, py, weight) in taps {
        if weight == 0.0 {
            continue;
        }
        if let Some(pixel) = pixel_at(image, px, py) {
            for (a, v) in acc.iter_mut().zip(pixel.0) {
                *a += weight * v as f64;
            }
        }
    }

    Rgb(acc.map(|v| v.round().clamp(0.0, 255.0) as u8))
}

/// Pixel at signed coordinates, `None` outside the canvas.
fn pixel_at(image: &RgbImage, x: i64, y: i64) -> Option<&Rgb<u8>> {
    if x < 0 || y < 0 || x >= image.width() as i64 || y >= image.height() as i64 {
        return None;
    }
    Some(image.get_pixel(x as u32, y as u32))
}
