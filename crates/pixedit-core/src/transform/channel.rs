use std::fmt;

use image::RgbImage;

/// Which color channel the display is restricted to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Channel {
    #[default]
    Original,
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 4] = [
        Channel::Original,
        Channel::Red,
        Channel::Green,
        Channel::Blue,
    ];

    /// Index of the kept component in RGB order, `None` for the full image.
    pub fn component(self) -> Option<usize> {
        match self {
            Self::Original => None,
            Self::Red => Some(0),
            Self::Green => Some(1),
            Self::Blue => Some(2),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => write!(f, "Original Image"),
            Self::Red => write!(f, "Red Channel"),
            Self::Green => write!(f, "Green Channel"),
            Self::Blue => write!(f, "Blue Channel"),
        }
    }
}

/// Copy of `image` with the two non-selected components forced to zero.
/// `Channel::Original` returns an unmodified copy.
pub fn isolate_channel(image: &RgbImage, channel: Channel) -> RgbImage {
    let mut out = image.clone();
    let Some(keep) = channel.component() else {
        return out;
    };
    for pixel in out.pixels_mut() {
        for (i, value) in pixel.0.iter_mut().enumerate() {
            if i != keep {
                *value = 0;
            }
        }
    }
    out
}
