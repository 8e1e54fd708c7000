use egui::{Style, Visuals};
use scribble::ScribbleApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting scribble");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_maximized(true),
        ..Default::default()
    };
    eframe::run_native(
        "Scribble",
        native_options,
        Box::new(|ctx| {
            let style = Style {
                visuals: Visuals::dark(),
                ..Default::default()
            };
            ctx.egui_ctx.set_style(style);
            Ok(Box::new(ScribbleApp::default()))
        }),
    )
}
