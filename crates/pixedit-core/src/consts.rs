/// Scale slider position at startup, in percent.
pub const DEFAULT_SCALE_PERCENT: u32 = 50;

/// Smallest accepted display scale, in percent.
pub const MIN_SCALE_PERCENT: u32 = 1;

/// Largest accepted display scale, in percent. Display is never upscaled.
pub const MAX_SCALE_PERCENT: u32 = 100;

/// Rotation prompt bounds, in degrees.
pub const MIN_ROTATION_DEGREES: f64 = -360.0;
pub const MAX_ROTATION_DEGREES: f64 = 360.0;

/// Circle radius prompt bounds, in pixels.
pub const MIN_CIRCLE_RADIUS: i64 = 1;
pub const MAX_CIRCLE_RADIUS: i64 = 10_000;

/// Radius offered by the circle prompt before the user edits it.
pub const DEFAULT_CIRCLE_RADIUS: i64 = 10;

/// Outline thickness of annotation circles, in pixels.
pub const DEFAULT_CIRCLE_STROKE_WIDTH: u32 = 2;

/// Thickest accepted circle outline, in pixels.
pub const MAX_CIRCLE_STROKE_WIDTH: u32 = 100;

/// Outline colour of annotation circles (pure red).
pub const DEFAULT_CIRCLE_COLOR: [u8; 3] = [255, 0, 0];

/// Lifetime of a transient status message, in seconds.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 5;

/// Longest accepted status message lifetime, in seconds (one hour).
pub const MAX_STATUS_TIMEOUT_SECS: u64 = 3600;

/// Camera opened by "Capture Photo".
pub const DEFAULT_CAMERA_INDEX: u32 = 0;

/// File extensions offered by the open dialog.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tif", "tiff", "webp"];
