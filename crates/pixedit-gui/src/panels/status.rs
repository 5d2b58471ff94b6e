use std::time::Instant;

use pixedit_core::status::Severity;

use crate::app::PixeditApp;

pub fn show(ctx: &egui::Context, app: &mut PixeditApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.horizontal(|ui| {
            match app.status.current(Instant::now()) {
                Some(message) => {
                    let text = egui::RichText::new(&message.text);
                    let text = match message.severity {
                        Severity::Info => text,
                        Severity::Error => text.color(ui.visuals().error_fg_color),
                    };
                    ui.label(text);
                }
                None => {
                    ui.label("");
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let state = app.dispatcher.state();
                ui.label(format!("Scale: {}%", state.scale_percent()));
                if let Some([w, h]) = app.viewport.image_size() {
                    ui.separator();
                    ui.label(format!("Display {w}x{h}"));
                }
                if let Some(loaded) = state.loaded() {
                    ui.separator();
                    let (w, h) = loaded.dimensions();
                    ui.label(format!("{w}x{h}"));
                    ui.separator();
                    ui.label(loaded.channel().to_string());
                    if loaded.is_negative() {
                        ui.separator();
                        ui.label("Negative");
                    }
                }
            });
        });
        ui.add_space(2.0);
    });
}
