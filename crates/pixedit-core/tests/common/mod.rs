#![allow(dead_code)]

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::{Rgb, RgbImage};

use pixedit_core::error::{PixeditError, Result};
use pixedit_core::source::{CameraDevice, CameraSource};

/// Image whose pixels all differ, so misplaced pixels are caught.
pub fn gradient_image(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            (x % 256) as u8,
            (y % 256) as u8,
            ((x * 7 + y * 13) % 256) as u8,
        ])
    })
}

pub fn solid_image(w: u32, h: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb(color))
}

/// Write `image` as PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("write test png");
    path
}

/// Camera stand-in that counts opens and releases.
#[derive(Clone, Default)]
pub struct FakeCamera {
    pub frame: Option<RgbImage>,
    pub open_fails: bool,
    pub opened: Rc<Cell<usize>>,
    pub released: Rc<Cell<usize>>,
    pub last_index: Rc<Cell<Option<u32>>>,
}

impl FakeCamera {
    pub fn returning(frame: RgbImage) -> Self {
        Self {
            frame: Some(frame),
            ..Default::default()
        }
    }

    pub fn without_frame() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            open_fails: true,
            ..Default::default()
        }
    }
}

pub struct FakeDevice {
    frame: Option<RgbImage>,
    released: Rc<Cell<usize>>,
}

impl CameraSource for FakeCamera {
    type Device = FakeDevice;

    fn open(&self, index: u32) -> Result<FakeDevice> {
        self.last_index.set(Some(index));
        if self.open_fails {
            return Err(PixeditError::DeviceUnavailable("no such device".into()));
        }
        self.opened.set(self.opened.get() + 1);
        Ok(FakeDevice {
            frame: self.frame.clone(),
            released: Rc::clone(&self.released),
        })
    }
}

impl CameraDevice for FakeDevice {
    fn read_frame(&mut self) -> Result<RgbImage> {
        self.frame
            .clone()
            .ok_or_else(|| PixeditError::Capture("no frame".into()))
    }

    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}
