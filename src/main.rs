mod app;
mod config;
mod models;
mod session;
mod ui;

use app::VistaGuardApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([960.0, 600.0])
            .with_title("Cyro - Vista Guard Pro"),
        ..Default::default()
    };

    eframe::run_native(
        "Vista Guard",
        options,
        Box::new(|cc| Box::new(VistaGuardApp::new(cc))),
    )
}
