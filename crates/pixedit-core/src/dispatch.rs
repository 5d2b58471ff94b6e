use tracing::{info, warn};

use crate::command::Command;
use crate::config::EditorConfig;
use crate::consts::{
    MAX_CIRCLE_RADIUS, MAX_ROTATION_DEGREES, MIN_CIRCLE_RADIUS, MIN_ROTATION_DEGREES,
};
use crate::error::{PixeditError, Result};
use crate::render::{render, Bitmap};
use crate::session::SessionState;
use crate::source::{capture_from_camera, load_from_path, CameraSource, DefaultCamera};
use crate::status::StatusMessage;
use crate::transform::{draw_circle, rotate_about_center};

/// Result of a successful action.
#[derive(Clone, Debug)]
pub struct Update {
    /// Short human-readable outcome.
    pub status: String,
    /// Freshly rendered display, `None` while no image is loaded.
    pub bitmap: Option<Bitmap>,
}

/// What the interface shows after an action, success or failure.
#[derive(Clone, Debug)]
pub struct Report {
    pub status: StatusMessage,
    /// New display; `None` leaves the previous view untouched.
    pub bitmap: Option<Bitmap>,
}

/// Compute the session that follows `command`, with its status text.
///
/// `state` is never modified; on error the caller keeps it as it was.
pub fn transition<S: CameraSource>(
    state: &SessionState,
    command: &Command,
    camera: &S,
    config: &EditorConfig,
) -> Result<(SessionState, String)> {
    let loaded = if command.requires_image() {
        Some(state.require_loaded()?)
    } else {
        None
    };

    match (command, loaded) {
        (Command::Load { path }, _) => {
            let image = load_from_path(path)?;
            Ok((state.with_image(image), "Image loaded successfully.".into()))
        }
        (Command::Capture, _) => {
            let image = capture_from_camera(camera, config.camera_index)?;
            Ok((state.with_image(image), "Photo captured successfully.".into()))
        }
        (Command::SetScale { percent }, _) => {
            let next = state.with_scale(*percent);
            let status = format!("Scale set to {}%.", next.scale_percent());
            Ok((next, status))
        }
        (Command::SelectChannel(channel), Some(loaded)) => Ok((
            state.with_loaded(loaded.with_channel(*channel)),
            format!("{channel} displayed."),
        )),
        (Command::ToggleNegative, Some(loaded)) => {
            let toggled = loaded.toggled_negative();
            let status = if toggled.is_negative() {
                "Negative image displayed."
            } else {
                "Original image restored."
            };
            Ok((state.with_loaded(toggled), status.into()))
        }
        (Command::Rotate { degrees }, Some(loaded)) => {
            if !degrees.is_finite() {
                return Err(PixeditError::InvalidArgument {
                    name: "angle",
                    reason: format!("{degrees} is not a number of degrees"),
                });
            }
            let degrees = degrees.clamp(MIN_ROTATION_DEGREES, MAX_ROTATION_DEGREES);
            let rotated = rotate_about_center(loaded.current(), degrees);
            Ok((
                state.with_loaded(loaded.with_current(rotated)),
                format!("Image rotated by {degrees} degrees."),
            ))
        }
        (Command::DrawCircle { x, y, radius }, Some(loaded)) => {
            let (w, h) = loaded.dimensions();
            let x = (*x).clamp(0, w as i64);
            let y = (*y).clamp(0, h as i64);
            let radius = (*radius).clamp(MIN_CIRCLE_RADIUS, MAX_CIRCLE_RADIUS);
            let drawn = draw_circle(loaded.current(), x, y, radius, &config.circle);
            Ok((
                state.with_loaded(loaded.with_current(drawn)),
                format!("Circle drawn at ({x}, {y}) with radius {radius}."),
            ))
        }
        // Image commands always carry the loaded image checked above.
        (_, None) => Err(PixeditError::NotLoaded),
    }
}

/// Apply `command` to `state` and render the result.
///
/// Returns the state to keep: the new one on success, `state` itself on error.
pub fn dispatch<S: CameraSource>(
    state: SessionState,
    command: &Command,
    camera: &S,
    config: &EditorConfig,
) -> (SessionState, Result<Update>) {
    match transition(&state, command, camera, config) {
        Ok((next, status)) => {
            let bitmap = next
                .displayed_image()
                .map(|displayed| render(&displayed, next.scale_percent(), config.resample));
            info!(
                command = %command,
                loaded = next.is_loaded(),
                negative = next.is_negative(),
                channel = %next.channel(),
                scale = next.scale_percent(),
                "Action applied"
            );
            (next, Ok(Update { status, bitmap }))
        }
        Err(e) => {
            warn!(command = %command, error = %e, "Action rejected");
            (state, Err(e))
        }
    }
}

/// Owns the session and applies commands to it one at a time.
pub struct Dispatcher<S: CameraSource = DefaultCamera> {
    state: SessionState,
    camera: S,
    config: EditorConfig,
}

impl Dispatcher<DefaultCamera> {
    pub fn with_default_camera(config: EditorConfig) -> Self {
        Self::new(DefaultCamera::default(), config)
    }
}

impl<S: CameraSource> Dispatcher<S> {
    pub fn new(camera: S, config: EditorConfig) -> Self {
        let config = config.sanitized();
        Self {
            state: SessionState::new(config.initial_scale_percent),
            camera,
            config,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the settings. The session itself is kept.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config.sanitized();
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Update> {
        let state = std::mem::take(&mut self.state);
        let (state, result) = dispatch(state, &command, &self.camera, &self.config);
        self.state = state;
        result
    }

    /// Dispatch and turn the outcome into what the user sees.
    pub fn dispatch_reported(&mut self, command: Command) -> Report {
        let timeout = self.config.status_timeout();
        match self.dispatch(command) {
            Ok(update) => Report {
                status: StatusMessage::info(update.status, timeout),
                bitmap: update.bitmap,
            },
            Err(e) => Report {
                status: StatusMessage::error(&e, timeout),
                bitmap: None,
            },
        }
    }

    /// Render the current display without changing the session.
    pub fn render_current(&self) -> Option<Bitmap> {
        self.state
            .displayed_image()
            .map(|displayed| render(&displayed, self.state.scale_percent(), self.config.resample))
    }
}
