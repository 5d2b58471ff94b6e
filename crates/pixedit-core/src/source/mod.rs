//! Where images come from: decoded files and single camera snapshots.

pub mod camera;
pub mod file;
#[cfg(feature = "camera")]
pub mod native;

pub use camera::{capture_from_camera, CameraDevice, CameraSource, DefaultCamera, NoCamera};
pub use file::load_from_path;
