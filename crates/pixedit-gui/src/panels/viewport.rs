use crate::app::PixeditApp;
use crate::states::centered_offset;

pub fn show(ctx: &egui::Context, app: &mut PixeditApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let view_rect = ui.available_rect_before_wrap();
        paint_background(ui, view_rect);

        let Some((texture_id, tex_size)) = app
            .viewport
            .texture
            .as_ref()
            .map(|t| (t.id(), egui::vec2(t.size()[0] as f32, t.size()[1] as f32)))
        else {
            show_placeholder(ui);
            return;
        };

        let output = egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                // Smaller images sit in the middle of the view.
                let canvas = tex_size.max(ui.available_size());
                let (rect, _) = ui.allocate_exact_size(canvas, egui::Sense::hover());
                let img_rect = egui::Rect::from_center_size(rect.center(), tex_size);
                ui.painter().image(
                    texture_id,
                    img_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            });

        // The inner rect excludes scrollbars, so the offset is known only
        // after the first layout pass.
        if app.viewport.take_recenter() {
            let mut state = output.state;
            state.offset = centered_offset(output.content_size, output.inner_rect.size());
            state.store(ui.ctx(), output.id);
            ui.ctx().request_repaint();
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Load an image or capture a photo to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
