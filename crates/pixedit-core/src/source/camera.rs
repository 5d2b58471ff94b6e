use image::RgbImage;
use tracing::{info, warn};

use crate::error::{PixeditError, Result};

/// Opens camera devices by index.
pub trait CameraSource {
    type Device: CameraDevice;

    /// Open the device. Fails with `DeviceUnavailable` when it cannot be opened.
    fn open(&self, index: u32) -> Result<Self::Device>;
}

/// An opened, exclusively owned camera.
pub trait CameraDevice {
    /// Block until one frame is available. Fails with `Capture`.
    fn read_frame(&mut self) -> Result<RgbImage>;

    /// Give the device back to the system. Called exactly once per opened device.
    fn release(&mut self);
}

/// Releases the wrapped device when dropped, on every exit path.
struct DeviceGuard<D: CameraDevice> {
    device: D,
}

impl<D: CameraDevice> DeviceGuard<D> {
    fn new(device: D) -> Self {
        Self { device }
    }
}

impl<D: CameraDevice> Drop for DeviceGuard<D> {
    fn drop(&mut self) {
        self.device.release();
    }
}

/// Open the camera, read exactly one frame and release the device.
///
/// The device is released before this returns, whether the read succeeded or not.
pub fn capture_from_camera<S: CameraSource>(source: &S, index: u32) -> Result<RgbImage> {
    let device = source.open(index).inspect_err(|e| {
        warn!(index, error = %e, "Camera could not be opened");
    })?;

    let mut guard = DeviceGuard::new(device);
    let frame = guard.device.read_frame();
    drop(guard);

    let frame = frame.inspect_err(|e| warn!(index, error = %e, "Camera frame read failed"))?;
    info!(
        index,
        width = frame.width(),
        height = frame.height(),
        "Camera frame captured"
    );
    Ok(frame)
}

/// Camera source for builds without a native backend. Opening always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCamera;

/// Device type of [`NoCamera`]; never constructed.
#[derive(Debug)]
pub enum NoDevice {}

impl CameraSource for NoCamera {
    type Device = NoDevice;

    fn open(&self, _index: u32) -> Result<NoDevice> {
        Err(PixeditError::DeviceUnavailable(
            "camera support not compiled in".into(),
        ))
    }
}

impl CameraDevice for NoDevice {
    fn read_frame(&mut self) -> Result<RgbImage> {
        match *self {}
    }

    fn release(&mut self) {
        match *self {}
    }
}

#[cfg(feature = "camera")]
pub type DefaultCamera = super::native::NativeCamera;

#[cfg(not(feature = "camera"))]
pub type DefaultCamera = NoCamera;
