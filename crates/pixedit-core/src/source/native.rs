use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use tracing::debug;

use crate::error::{PixeditError, Result};

use super::camera::{CameraDevice, CameraSource};

/// System camera through the platform's native capture API.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeCamera;

pub struct NativeDevice {
    camera: Camera,
}

impl CameraSource for NativeCamera {
    type Device = NativeDevice;

    fn open(&self, index: u32) -> Result<NativeDevice> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .map_err(|e| PixeditError::DeviceUnavailable(e.to_string()))?;
        camera
            .open_stream()
            .map_err(|e| PixeditError::DeviceUnavailable(e.to_string()))?;
        debug!(index, "Camera stream opened");
        Ok(NativeDevice { camera })
    }
}

impl CameraDevice for NativeDevice {
    fn read_frame(&mut self) -> Result<RgbImage> {
        let buffer = self
            .camera
            .frame()
            .map_err(|e| PixeditError::Capture(e.to_string()))?;
        let decoded = buffer
            .decode_image::<RgbFormat>()
            .map_err(|e| PixeditError::Capture(e.to_string()))?;
        let (width, height) = (decoded.width(), decoded.height());
        RgbImage::from_raw(width, height, decoded.into_raw())
            .ok_or_else(|| PixeditError::Capture("frame buffer size mismatch".into()))
    }

    fn release(&mut self) {
        if let Err(e) = self.camera.stop_stream() {
            debug!(error = %e, "Camera stream did not stop cleanly");
        }
    }
}
