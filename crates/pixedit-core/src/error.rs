use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixeditError {
    #[error("Failed to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Cannot access the camera: {0}")]
    DeviceUnavailable(String),

    #[error("Failed to capture photo: {0}")]
    Capture(String),

    #[error("No image loaded.")]
    NotLoaded,

    #[error("Invalid {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Invalid settings: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PixeditError>;
