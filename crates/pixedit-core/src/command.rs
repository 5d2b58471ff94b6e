use std::fmt;
use std::path::PathBuf;

use crate::transform::Channel;

/// One user-initiated action.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Decode an image file and start a new session with it.
    Load { path: PathBuf },
    /// Take one camera snapshot and start a new session with it.
    Capture,
    SelectChannel(Channel),
    ToggleNegative,
    /// Rotate the working image; degrees are clamped to -360..=360.
    Rotate { degrees: f64 },
    /// Circle outline on the working image. The centre is clamped to the
    /// canvas (both bounds inclusive), the radius to 1..=10000.
    DrawCircle { x: i64, y: i64, radius: i64 },
    /// Display scale, clamped to 1..=100 percent.
    SetScale { percent: u32 },
}

impl Command {
    /// Whether the command fails with `NotLoaded` on an empty session.
    pub fn requires_image(&self) -> bool {
        !matches!(
            self,
            Self::Load { .. } | Self::Capture | Self::SetScale { .. }
        )
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load { .. } => write!(f, "Load Image"),
            Self::Capture => write!(f, "Capture Photo"),
            Self::SelectChannel(_) => write!(f, "Select Channel"),
            Self::ToggleNegative => write!(f, "Toggle Negative"),
            Self::Rotate { .. } => write!(f, "Rotate"),
            Self::DrawCircle { .. } => write!(f, "Draw Circle"),
            Self::SetScale { .. } => write!(f, "Scale"),
        }
    }
}
