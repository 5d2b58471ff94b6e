use pixedit_core::command::Command;
use pixedit_core::consts::{MAX_SCALE_PERCENT, MIN_SCALE_PERCENT};
use pixedit_core::transform::Channel;

use crate::app::PixeditApp;

pub fn show(ctx: &egui::Context, app: &mut PixeditApp) {
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.button("Load Image").clicked() {
                app.open_image(ctx);
            }
            if ui.button("Capture Photo").clicked() {
                app.run(ctx, Command::Capture);
            }
            if ui.button("Show Negative Image").clicked() {
                app.run(ctx, Command::ToggleNegative);
            }
            if ui.button("Rotate Image").clicked() {
                app.open_rotate_prompt();
            }
            if ui.button("Draw Circle").clicked() {
                app.open_circle_prompt();
            }
        });

        ui.horizontal(|ui| {
            channel_selector(ui, ctx, app);
            ui.separator();
            scale_slider(ui, ctx, app);
        });
        ui.add_space(4.0);
    });
}

fn channel_selector(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut PixeditApp) {
    let current = app.dispatcher.state().channel();
    let mut selected = current;
    egui::ComboBox::from_id_salt("channel")
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for channel in Channel::ALL {
                ui.selectable_value(&mut selected, channel, channel.to_string());
            }
        });
    if selected != current {
        app.run(ctx, Command::SelectChannel(selected));
    }
}

fn scale_slider(ui: &mut egui::Ui, ctx: &egui::Context, app: &mut PixeditApp) {
    let mut percent = app.dispatcher.state().scale_percent();
    ui.label("Scale:");
    let response = ui.add(
        egui::Slider::new(&mut percent, MIN_SCALE_PERCENT..=MAX_SCALE_PERCENT)
            .suffix("%")
            .step_by(1.0),
    );
    if response.changed() {
        app.run(ctx, Command::SetScale { percent });
    }
}
