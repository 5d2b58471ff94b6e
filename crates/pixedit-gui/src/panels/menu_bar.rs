use pixedit_core::command::Command;

use crate::app::PixeditApp;

pub fn show(ctx: &egui::Context, app: &mut PixeditApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let negative_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::N);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Load Image...").shortcut_text(ctx.format_shortcut(&open_shortcut)))
                    .clicked()
                {
                    ui.close();
                    app.open_image(ctx);
                }

                if ui.button("Capture Photo").clicked() {
                    ui.close();
                    app.run(ctx, Command::Capture);
                }

                ui.separator();

                if ui.button("Import Settings...").clicked() {
                    ui.close();
                    app.import_settings(ctx);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                if ui
                    .add(
                        egui::Button::new("Show Negative Image")
                            .shortcut_text(ctx.format_shortcut(&negative_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.run(ctx, Command::ToggleNegative);
                }

                if ui.button("Rotate Image...").clicked() {
                    ui.close();
                    app.open_rotate_prompt();
                }

                if ui.button("Draw Circle...").clicked() {
                    ui.close();
                    app.open_circle_prompt();
                }

                ui.separator();

                if ui.button("Reset Settings").clicked() {
                    ui.close();
                    app.reset_settings(ctx);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus), ignored while a dialog is open.
    if app.prompt.is_some() || app.error_dialog.is_some() {
        return;
    }
    if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
        app.open_image(ctx);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&negative_shortcut)) {
        app.run(ctx, Command::ToggleNegative);
    }
    if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}
