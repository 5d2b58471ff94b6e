use std::path::Path;
use std::time::Instant;

use pixedit_core::command::Command;
use pixedit_core::config::EditorConfig;
use pixedit_core::dispatch::{Dispatcher, Report};
use pixedit_core::error::PixeditError;
use pixedit_core::render::Bitmap;
use pixedit_core::source::file::has_image_extension;
use pixedit_core::source::DefaultCamera;
use pixedit_core::status::StatusMessage;
use tracing::warn;

use crate::convert::bitmap_to_color_image;
use crate::panels;
use crate::settings;
use crate::states::{Prompt, StatusState, ViewportState};

pub struct PixeditApp {
    pub dispatcher: Dispatcher<DefaultCamera>,
    pub viewport: ViewportState,
    pub status: StatusState,
    /// Open input dialog, if any.
    pub prompt: Option<Prompt>,
    /// Text of the modal error dialog, if one is showing.
    pub error_dialog: Option<String>,
    pub show_about: bool,
}

impl Default for PixeditApp {
    fn default() -> Self {
        Self {
            dispatcher: Dispatcher::with_default_camera(EditorConfig::default()),
            viewport: ViewportState::default(),
            status: StatusState::default(),
            prompt: None,
            error_dialog: None,
            show_about: false,
        }
    }
}

impl PixeditApp {
    /// Apply one command and show its outcome.
    pub fn run(&mut self, ctx: &egui::Context, command: Command) {
        let report = self.dispatcher.dispatch_reported(command);
        self.apply_report(ctx, report);
    }

    fn apply_report(&mut self, ctx: &egui::Context, report: Report) {
        if let Some(bitmap) = report.bitmap {
            self.show_bitmap(ctx, &bitmap);
        }
        self.show_status(report.status);
    }

    fn show_bitmap(&mut self, ctx: &egui::Context, bitmap: &Bitmap) {
        let texture = ctx.load_texture(
            "viewport",
            bitmap_to_color_image(bitmap),
            egui::TextureOptions::NEAREST,
        );
        self.viewport.set_texture(texture);
    }

    pub fn show_status(&mut self, status: StatusMessage) {
        if status.is_blocking() {
            self.error_dialog = Some(status.text.clone());
        }
        self.status.show(status, Instant::now());
    }

    pub fn info(&mut self, text: impl Into<String>) {
        let timeout = self.dispatcher.config().status_timeout();
        self.show_status(StatusMessage::info(text, timeout));
    }

    pub fn report_error(&mut self, err: &PixeditError) {
        let timeout = self.dispatcher.config().status_timeout();
        self.show_status(StatusMessage::error(err, timeout));
    }

    /// Ask for an image file and load it. Blocks until the dialog closes.
    pub fn open_image(&mut self, ctx: &egui::Context) {
        let picked = rfd::FileDialog::new()
            .set_title("Open Image File")
            .add_filter("Images", pixedit_core::consts::IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();
        match picked {
            Some(path) => {
                if !has_image_extension(&path) {
                    warn!(path = %path.display(), "Unrecognised extension, decoding anyway");
                }
                self.run(ctx, Command::Load { path })
            }
            None => self.info("Image load cancelled."),
        }
    }

    /// Open the rotation dialog, or report that there is nothing to rotate.
    pub fn open_rotate_prompt(&mut self) {
        match self.dispatcher.state().require_loaded() {
            Ok(_) => self.prompt = Some(Prompt::rotate()),
            Err(e) => self.report_error(&e),
        }
    }

    /// Open the circle dialog bounded by the current canvas.
    pub fn open_circle_prompt(&mut self) {
        match self.dispatcher.state().require_loaded() {
            Ok(loaded) => {
                let (w, h) = loaded.dimensions();
                self.prompt = Some(Prompt::circle(w, h));
            }
            Err(e) => self.report_error(&e),
        }
    }

    pub fn import_settings(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Import Settings")
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        self.apply_settings_file(ctx, &path);
    }

    fn apply_settings_file(&mut self, ctx: &egui::Context, path: &Path) {
        match settings::read_settings(path) {
            Ok(config) => {
                self.dispatcher.set_config(config);
                self.refresh_view(ctx);
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                self.info(format!("Settings imported from {name}."));
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Settings import failed");
                self.report_error(&PixeditError::Config(format!("{e:#}")));
            }
        }
    }

    pub fn reset_settings(&mut self, ctx: &egui::Context) {
        self.dispatcher.set_config(EditorConfig::default());
        self.refresh_view(ctx);
        self.info("Settings reset to defaults.");
    }

    /// Re-render the display after a settings change (resampling may differ).
    fn refresh_view(&mut self, ctx: &egui::Context) {
        if let Some(bitmap) = self.dispatcher.render_current() {
            self.show_bitmap(ctx, &bitmap);
        }
    }
}

impl eframe::App for PixeditApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::toolbar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::dialogs::show(ctx, self);

        if let Some(remaining) = self.status.remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_starts_empty() {
        let app = PixeditApp::default();
        assert!(!app.dispatcher.state().is_loaded());
        assert!(app.prompt.is_none());
        assert!(app.error_dialog.is_none());
        assert!(app.viewport.texture.is_none());
    }

    #[test]
    fn test_import_settings_with_huge_timeout_shows_status() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "status_timeout_secs = 9223372036854775807\n").unwrap();

        let ctx = egui::Context::default();
        let mut app = PixeditApp::default();
        app.apply_settings_file(&ctx, &path);

        let shown = app.status.current(Instant::now()).unwrap();
        assert_eq!(shown.text, "Settings imported from settings.toml.");
        assert!(app.error_dialog.is_none());
    }

    #[test]
    fn test_import_malformed_settings_opens_error_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "resample = 3\n").unwrap();

        let ctx = egui::Context::default();
        let mut app = PixeditApp::default();
        app.apply_settings_file(&ctx, &path);

        let dialog = app.error_dialog.as_deref().unwrap();
        assert!(dialog.starts_with("Invalid settings:"), "{dialog}");
    }
}
