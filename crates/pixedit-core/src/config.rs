use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CAMERA_INDEX, DEFAULT_CIRCLE_COLOR, DEFAULT_CIRCLE_STROKE_WIDTH,
    DEFAULT_SCALE_PERCENT, DEFAULT_STATUS_TIMEOUT_SECS, MAX_CIRCLE_STROKE_WIDTH,
    MAX_SCALE_PERCENT, MAX_STATUS_TIMEOUT_SECS, MIN_SCALE_PERCENT,
};

/// Editor settings. Every field falls back to its default when absent from a
/// settings file, so a partial file is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Scale slider position at startup, in percent (1..=100).
    pub initial_scale_percent: u32,
    /// Index of the camera opened by "Capture Photo".
    pub camera_index: u32,
    pub circle: CircleStyle,
    /// Lifetime of transient status messages.
    pub status_timeout_secs: u64,
    pub resample: Resample,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_scale_percent: DEFAULT_SCALE_PERCENT,
            camera_index: DEFAULT_CAMERA_INDEX,
            circle: CircleStyle::default(),
            status_timeout_secs: DEFAULT_STATUS_TIMEOUT_SECS,
            resample: Resample::default(),
        }
    }
}

impl EditorConfig {
    /// Clamp out-of-range values into their accepted ranges.
    pub fn sanitized(mut self) -> Self {
        self.initial_scale_percent = self
            .initial_scale_percent
            .clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT);
        self.circle.stroke_width = self.circle.stroke_width.clamp(1, MAX_CIRCLE_STROKE_WIDTH);
        self.status_timeout_secs = self.status_timeout_secs.min(MAX_STATUS_TIMEOUT_SECS);
        self
    }

    pub fn status_timeout(&self) -> Duration {
        Duration::from_secs(self.status_timeout_secs)
    }
}

/// Appearance of annotation circles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleStyle {
    /// Outline thickness in pixels.
    pub stroke_width: u32,
    /// Outline colour as RGB.
    pub color: [u8; 3],
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_CIRCLE_STROKE_WIDTH,
            color: DEFAULT_CIRCLE_COLOR,
        }
    }
}

/// Resampling used when scaling the working image for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resample {
    Nearest,
    #[default]
    Linear,
}

impl Resample {
    pub(crate) fn filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Linear => image::imageops::FilterType::Triangle,
        }
    }
}

impl fmt::Display for Resample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Linear => write!(f, "Linear"),
        }
    }
}
