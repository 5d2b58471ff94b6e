mod common;

use std::path::Path;

use image::{Rgba, RgbaImage};

use pixedit_core::error::PixeditError;
use pixedit_core::source::file::has_image_extension;
use pixedit_core::source::{capture_from_camera, load_from_path, NoCamera};

use common::{gradient_image, write_png, FakeCamera};

// ---------------------------------------------------------------------------
// load_from_path
// ---------------------------------------------------------------------------

#[test]
fn test_load_png_round_trips_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let img = gradient_image(31, 17);
    let path = write_png(dir.path(), "grad.png", &img);
    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded, img);
}

#[test]
fn test_load_drops_alpha_channel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");
    RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]))
        .save(&path)
        .unwrap();
    let loaded = load_from_path(&path).unwrap();
    assert_eq!(loaded.dimensions(), (3, 2));
    assert_eq!(loaded.get_pixel(0, 0).0, [10, 20, 30]);
}

#[test]
fn test_load_missing_file_is_decode_error() {
    let err = load_from_path(Path::new("/nonexistent/missing.png")).unwrap_err();
    match err {
        PixeditError::Decode { path, .. } => {
            assert_eq!(path, Path::new("/nonexistent/missing.png"))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_load_garbage_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, PixeditError::Decode { .. }));
    assert!(err.to_string().starts_with("Failed to load image"));
}

#[test]
fn test_image_extension_filter() {
    assert!(has_image_extension(Path::new("a.png")));
    assert!(has_image_extension(Path::new("photo.JPG")));
    assert!(has_image_extension(Path::new("scan.tiff")));
    assert!(!has_image_extension(Path::new("notes.txt")));
    assert!(!has_image_extension(Path::new("no_extension")));
}

// ---------------------------------------------------------------------------
// capture_from_camera
// ---------------------------------------------------------------------------

#[test]
fn test_capture_returns_frame_and_releases_once() {
    let camera = FakeCamera::returning(gradient_image(8, 6));
    let frame = capture_from_camera(&camera, 0).unwrap();
    assert_eq!(frame, gradient_image(8, 6));
    assert_eq!(camera.opened.get(), 1);
    assert_eq!(camera.released.get(), 1);
}

#[test]
fn test_capture_read_failure_still_releases() {
    let camera = FakeCamera::without_frame();
    let err = capture_from_camera(&camera, 0).unwrap_err();
    assert!(matches!(err, PixeditError::Capture(_)));
    assert_eq!(camera.opened.get(), 1);
    assert_eq!(camera.released.get(), 1);
}

#[test]
fn test_capture_open_failure_has_nothing_to_release() {
    let camera = FakeCamera::unavailable();
    let err = capture_from_camera(&camera, 0).unwrap_err();
    assert!(matches!(err, PixeditError::DeviceUnavailable(_)));
    assert_eq!(camera.opened.get(), 0);
    assert_eq!(camera.released.get(), 0);
}

#[test]
fn test_repeated_captures_pair_opens_and_releases() {
    let camera = FakeCamera::returning(gradient_image(2, 2));
    for _ in 0..3 {
        capture_from_camera(&camera, 0).unwrap();
    }
    assert_eq!(camera.opened.get(), 3);
    assert_eq!(camera.released.get(), 3);
}

#[test]
fn test_capture_passes_device_index() {
    let camera = FakeCamera::returning(gradient_image(2, 2));
    capture_from_camera(&camera, 2).unwrap();
    assert_eq!(camera.last_index.get(), Some(2));
}

#[test]
fn test_no_camera_is_unavailable() {
    let err = capture_from_camera(&NoCamera, 0).unwrap_err();
    assert!(matches!(err, PixeditError::DeviceUnavailable(_)));
    assert_eq!(
        err.to_string(),
        "Cannot access the camera: camera support not compiled in"
    );
}
