use polysketch::config::SketchConfig;
use polysketch::ui::app::SketchApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "polysketch=info".into()),
        )
        .init();

    let config = SketchConfig::load_or_default();
    tracing::info!(
        double_click_threshold_ms = config.double_click_threshold_ms,
        history_limit = ?config.history_limit,
        "starting PolySketch"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("PolySketch"),
        ..Default::default()
    };

    eframe::run_native(
        "PolySketch",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SketchApp::new(&config)))),
    )
}
