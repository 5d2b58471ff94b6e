use image::RgbImage;

use crate::consts::{DEFAULT_SCALE_PERCENT, MAX_SCALE_PERCENT, MIN_SCALE_PERCENT};
use crate::error::{PixeditError, Result};
use crate::transform::{isolate_channel, negate, Channel};

/// The image being edited together with its view flags.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    /// Frozen copy taken at load/capture time. Never written by a transform.
    original: RgbImage,
    /// Working image. Rotations and circles replace it.
    current: RgbImage,
    /// Channel the display is restricted to.
    channel: Channel,
    /// Display shows the bitwise complement of `current`.
    is_negative: bool,
}

impl LoadedImage {
    pub fn new(image: RgbImage) -> Self {
        Self {
            original: image.clone(),
            current: image,
            channel: Channel::Original,
            is_negative: false,
        }
    }

    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    pub fn current(&self) -> &RgbImage {
        &self.current
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn is_negative(&self) -> bool {
        self.is_negative
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.current.dimensions()
    }

    /// Image the display shows: the complement of `current` while negative,
    /// otherwise `current` restricted to the selected channel.
    pub fn displayed(&self) -> RgbImage {
        if self.is_negative {
            negate(&self.current)
        } else {
            isolate_channel(&self.current, self.channel)
        }
    }

    pub(crate) fn with_current(&self, current: RgbImage) -> Self {
        Self {
            current,
            ..self.clone()
        }
    }

    /// Select a channel view. `Original` also drops every edit made since load.
    /// Leaves negative mode, since the display is no longer an inverse.
    pub(crate) fn with_channel(&self, channel: Channel) -> Self {
        let current = match channel {
            Channel::Original => self.original.clone(),
            _ => self.current.clone(),
        };
        Self {
            original: self.original.clone(),
            current,
            channel,
            is_negative: false,
        }
    }

    /// Enter negative mode, or leave it by reverting to the pristine original.
    pub(crate) fn toggled_negative(&self) -> Self {
        if self.is_negative {
            Self::new(self.original.clone())
        } else {
            Self {
                is_negative: true,
                ..self.clone()
            }
        }
    }
}

/// Everything the editor knows between two user actions.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    loaded: Option<LoadedImage>,
    scale_percent: u32,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE_PERCENT)
    }
}

impl SessionState {
    /// Empty session with the given display scale (clamped to 1..=100).
    pub fn new(scale_percent: u32) -> Self {
        Self {
            loaded: None,
            scale_percent: clamp_scale(scale_percent),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        self.loaded.as_ref()
    }

    /// The loaded image, or `NotLoaded`.
    pub fn require_loaded(&self) -> Result<&LoadedImage> {
        self.loaded.as_ref().ok_or(PixeditError::NotLoaded)
    }

    pub fn current_image(&self) -> Option<&RgbImage> {
        self.loaded.as_ref().map(LoadedImage::current)
    }

    pub fn original_image(&self) -> Option<&RgbImage> {
        self.loaded.as_ref().map(LoadedImage::original)
    }

    pub fn is_negative(&self) -> bool {
        self.loaded.as_ref().is_some_and(LoadedImage::is_negative)
    }

    pub fn channel(&self) -> Channel {
        self.loaded
            .as_ref()
            .map(LoadedImage::channel)
            .unwrap_or_default()
    }

    pub fn scale_percent(&self) -> u32 {
        self.scale_percent
    }

    /// Display scale as a fraction in (0, 1].
    pub fn scale_factor(&self) -> f64 {
        self.scale_percent as f64 / 100.0
    }

    pub fn displayed_image(&self) -> Option<RgbImage> {
        self.loaded.as_ref().map(LoadedImage::displayed)
    }

    /// Replace the session's image, keeping the display scale.
    pub(crate) fn with_image(&self, image: RgbImage) -> Self {
        Self {
            loaded: Some(LoadedImage::new(image)),
            scale_percent: self.scale_percent,
        }
    }

    pub(crate) fn with_loaded(&self, loaded: LoadedImage) -> Self {
        Self {
            loaded: Some(loaded),
            scale_percent: self.scale_percent,
        }
    }

    pub(crate) fn with_scale(&self, percent: u32) -> Self {
        Self {
            loaded: self.loaded.clone(),
            scale_percent: clamp_scale(percent),
        }
    }
}

pub(crate) fn clamp_scale(percent: u32) -> u32 {
    percent.clamp(MIN_SCALE_PERCENT, MAX_SCALE_PERCENT)
}
