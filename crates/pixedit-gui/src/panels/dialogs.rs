use pixedit_core::consts::{
    MAX_CIRCLE_RADIUS, MAX_ROTATION_DEGREES, MIN_CIRCLE_RADIUS, MIN_ROTATION_DEGREES,
};

use crate::app::PixeditApp;
use crate::states::Prompt;

pub fn show(ctx: &egui::Context, app: &mut PixeditApp) {
    prompt_dialog(ctx, app);
    error_dialog(ctx, app);
    about_window(ctx, app);
}

enum PromptAction {
    None,
    Confirm,
    Cancel,
}

fn prompt_dialog(ctx: &egui::Context, app: &mut PixeditApp) {
    let Some(prompt) = app.prompt.as_mut() else {
        return;
    };

    let mut action = PromptAction::None;
    let modal = egui::Modal::new(egui::Id::new("prompt_dialog")).show(ctx, |ui| {
        ui.heading(prompt.title());
        ui.add_space(8.0);

        egui::Grid::new("prompt_fields")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| match &mut *prompt {
                Prompt::Rotate { degrees } => {
                    ui.label("Angle in degrees:");
                    ui.add(
                        egui::DragValue::new(degrees)
                            .range(MIN_ROTATION_DEGREES..=MAX_ROTATION_DEGREES)
                            .speed(1.0)
                            .max_decimals(1),
                    );
                    ui.end_row();
                }
                Prompt::Circle {
                    x,
                    y,
                    radius,
                    width,
                    height,
                } => {
                    ui.label("X coordinate:");
                    ui.add(egui::DragValue::new(x).range(0..=*width));
                    ui.end_row();
                    ui.label("Y coordinate:");
                    ui.add(egui::DragValue::new(y).range(0..=*height));
                    ui.end_row();
                    ui.label("Radius:");
                    ui.add(egui::DragValue::new(radius).range(MIN_CIRCLE_RADIUS..=MAX_CIRCLE_RADIUS));
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                action = PromptAction::Confirm;
            }
            if ui.button("Cancel").clicked() {
                action = PromptAction::Cancel;
            }
        });
    });
    if modal.should_close() && matches!(action, PromptAction::None) {
        action = PromptAction::Cancel;
    }

    match action {
        PromptAction::None => {}
        PromptAction::Cancel => app.prompt = None,
        PromptAction::Confirm => {
            if let Some(prompt) = app.prompt.take() {
                app.run(ctx, prompt.command());
            }
        }
    }
}

fn error_dialog(ctx: &egui::Context, app: &mut PixeditApp) {
    let Some(message) = app.error_dialog.as_deref() else {
        return;
    };

    let mut dismissed = false;
    let modal = egui::Modal::new(egui::Id::new("error_dialog")).show(ctx, |ui| {
        ui.set_max_width(420.0);
        ui.heading("Error");
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });
    if dismissed || modal.should_close() {
        app.error_dialog = None;
    }
}

fn about_window(ctx: &egui::Context, app: &mut PixeditApp) {
    if !app.show_about {
        return;
    }
    egui::Window::new("About pixedit")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("pixedit");
                ui.label("Single-image viewer and editor");
                ui.add_space(8.0);
                ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                ui.add_space(8.0);
                if ui.button("Close").clicked() {
                    app.show_about = false;
                }
            });
        });
}
