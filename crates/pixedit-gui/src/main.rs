mod app;
mod convert;
mod panels;
mod settings;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("pixedit"),
        ..Default::default()
    };

    eframe::run_native(
        "pixedit",
        options,
        Box::new(|_cc| Ok(Box::new(app::PixeditApp::default()))),
    )
}
