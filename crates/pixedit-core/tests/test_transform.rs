mod common;

use image::Rgb;

use pixedit_core::config::CircleStyle;
use pixedit_core::transform::{draw_circle, isolate_channel, negate, rotate_about_center, Channel};

use common::{gradient_image, solid_image};

// ---------------------------------------------------------------------------
// isolate_channel
// ---------------------------------------------------------------------------

#[test]
fn test_isolate_red_zeroes_green_and_blue() {
    let img = gradient_image(16, 8);
    let red = isolate_channel(&img, Channel::Red);
    for (src, out) in img.pixels().zip(red.pixels()) {
        assert_eq!(out.0, [src.0[0], 0, 0]);
    }
}

#[test]
fn test_isolate_green_keeps_only_green() {
    let img = gradient_image(16, 8);
    let green = isolate_channel(&img, Channel::Green);
    for (src, out) in img.pixels().zip(green.pixels()) {
        assert_eq!(out.0, [0, src.0[1], 0]);
    }
}

#[test]
fn test_isolate_blue_keeps_only_blue() {
    let img = gradient_image(16, 8);
    let blue = isolate_channel(&img, Channel::Blue);
    for (src, out) in img.pixels().zip(blue.pixels()) {
        assert_eq!(out.0, [0, 0, src.0[2]]);
    }
}

#[test]
fn test_isolate_original_is_identity() {
    let img = gradient_image(16, 8);
    assert_eq!(isolate_channel(&img, Channel::Original), img);
}

#[test]
fn test_channel_display_names() {
    let names: Vec<String> = Channel::ALL.iter().map(|c| c.to_string()).collect();
    assert_eq!(
        names,
        ["Original Image", "Red Channel", "Green Channel", "Blue Channel"]
    );
}

// ---------------------------------------------------------------------------
// negate
// ---------------------------------------------------------------------------

#[test]
fn test_negate_complements_every_component() {
    let img = gradient_image(9, 5);
    let neg = negate(&img);
    for (src, out) in img.pixels().zip(neg.pixels()) {
        for c in 0..3 {
            assert_eq!(out.0[c], 255 - src.0[c]);
        }
    }
}

#[test]
fn test_negate_twice_restores_input() {
    let img = gradient_image(9, 5);
    assert_eq!(negate(&negate(&img)), img);
}

#[test]
fn test_negate_leaves_input_untouched() {
    let img = solid_image(4, 4, [10, 20, 30]);
    let _ = negate(&img);
    assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
}

// ---------------------------------------------------------------------------
// rotate_about_center
// ---------------------------------------------------------------------------

#[test]
fn test_rotate_zero_is_identity() {
    let img = gradient_image(20, 10);
    assert_eq!(rotate_about_center(&img, 0.0), img);
}

#[test]
fn test_rotate_full_turn_is_identity() {
    let img = gradient_image(20, 10);
    assert_eq!(rotate_about_center(&img, 360.0), img);
    assert_eq!(rotate_about_center(&img, -360.0), img);
}

#[test]
fn test_rotate_keeps_canvas_size() {
    let img = gradient_image(200, 100);
    let rotated = rotate_about_center(&img, 90.0);
    assert_eq!(rotated.dimensions(), (200, 100));
}

#[test]
fn test_rotate_positive_angle_is_counter_clockwise() {
    // Marker right of centre moves above centre.
    let mut img = solid_image(5, 5, [0, 0, 0]);
    img.put_pixel(4, 2, Rgb([255, 255, 255]));
    let rotated = rotate_about_center(&img, 90.0);
    assert_eq!(rotated.get_pixel(2, 0).0, [255, 255, 255]);
    assert_eq!(rotated.get_pixel(4, 2).0, [0, 0, 0]);
}

#[test]
fn test_rotate_negative_angle_is_clockwise() {
    let mut img = solid_image(5, 5, [0, 0, 0]);
    img.put_pixel(4, 2, Rgb([255, 255, 255]));
    let rotated = rotate_about_center(&img, -90.0);
    assert_eq!(rotated.get_pixel(2, 4).0, [255, 255, 255]);
}

#[test]
fn test_rotate_90_maps_pixels_about_center() {
    // Centre (100, 50): dst(x, y) = src(150 - y, x - 50).
    let img = gradient_image(200, 100);
    let rotated = rotate_about_center(&img, 90.0);
    assert_eq!(rotated.get_pixel(100, 50), img.get_pixel(100, 50));
    assert_eq!(rotated.get_pixel(100, 0), img.get_pixel(150, 50));
    assert_eq!(rotated.get_pixel(120, 30), img.get_pixel(120, 70));
}

#[test]
fn test_rotate_crops_corners_to_black() {
    let img = solid_image(200, 100, [200, 200, 200]);
    let rotated = rotate_about_center(&img, 90.0);
    assert_eq!(rotated.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(rotated.get_pixel(199, 99).0, [0, 0, 0]);
}

#[test]
fn test_rotate_180_twice_is_identity_on_odd_square() {
    let img = gradient_image(7, 7);
    let twice = rotate_about_center(&rotate_about_center(&img, 180.0), 180.0);
    assert_eq!(twice, img);
}

#[test]
fn test_rotate_arbitrary_angle_keeps_solid_interior() {
    let img = solid_image(41, 41, [90, 120, 150]);
    let rotated = rotate_about_center(&img, 33.0);
    assert_eq!(rotated.get_pixel(20, 20).0, [90, 120, 150]);
    assert_eq!(rotated.get_pixel(22, 18).0, [90, 120, 150]);
}

// ---------------------------------------------------------------------------
// draw_circle
// ---------------------------------------------------------------------------

const RED: [u8; 3] = [255, 0, 0];

#[test]
fn test_circle_outline_hits_radius_points() {
    let img = solid_image(21, 21, [0, 0, 0]);
    let out = draw_circle(&img, 10, 10, 5, &CircleStyle::default());
    assert_eq!(out.get_pixel(15, 10).0, RED);
    assert_eq!(out.get_pixel(5, 10).0, RED);
    assert_eq!(out.get_pixel(10, 15).0, RED);
    assert_eq!(out.get_pixel(10, 5).0, RED);
}

#[test]
fn test_circle_is_hollow() {
    let img = solid_image(21, 21, [0, 0, 0]);
    let out = draw_circle(&img, 10, 10, 5, &CircleStyle::default());
    assert_eq!(out.get_pixel(10, 10).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(12, 10).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0]);
}

#[test]
fn test_circle_stroke_width_bounds_outline() {
    // Stroke 2 covers distances 4..=6 from the centre for radius 5.
    let img = solid_image(21, 21, [0, 0, 0]);
    let out = draw_circle(&img, 10, 10, 5, &CircleStyle::default());
    assert_eq!(out.get_pixel(14, 10).0, RED);
    assert_eq!(out.get_pixel(16, 10).0, RED);
    assert_eq!(out.get_pixel(17, 10).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(13, 10).0, [0, 0, 0]);
}

#[test]
fn test_circle_uses_style_color() {
    let img = solid_image(21, 21, [0, 0, 0]);
    let style = CircleStyle {
        stroke_width: 1,
        color: [0, 255, 0],
    };
    let out = draw_circle(&img, 10, 10, 5, &style);
    assert_eq!(out.get_pixel(15, 10).0, [0, 255, 0]);
}

#[test]
fn test_circle_outside_canvas_is_clipped() {
    let img = solid_image(200, 100, [1, 2, 3]);
    let out = draw_circle(&img, 1000, 1000, 10, &CircleStyle::default());
    assert_eq!(out, img);
}

#[test]
fn test_circle_partially_outside_canvas() {
    let img = solid_image(200, 100, [0, 0, 0]);
    let out = draw_circle(&img, 200, 100, 10, &CircleStyle::default());
    assert_eq!(out.get_pixel(190, 99).0, RED);
    assert_eq!(out.get_pixel(199, 90).0, RED);
}

#[test]
fn test_circle_huge_radius_does_not_touch_small_canvas() {
    let img = solid_image(50, 50, [0, 0, 0]);
    let out = draw_circle(&img, 25, 25, 10_000, &CircleStyle::default());
    assert_eq!(out, img);
}

#[test]
fn test_circle_leaves_input_untouched() {
    let img = solid_image(21, 21, [0, 0, 0]);
    let _ = draw_circle(&img, 10, 10, 5, &CircleStyle::default());
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
}
