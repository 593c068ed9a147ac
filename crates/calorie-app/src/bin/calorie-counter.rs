//! Calorie Counter desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Calorie Counter application.

use calorie_app::CalorieApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.calorie-counter";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Calorie Counter, version={}",
        calorie_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((420.0, 720.0))
            .with_min_inner_size((320.0, 480.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Calorie Counter",
        options,
        Box::new(|cc| Ok(Box::new(CalorieApp::new(cc)))),
    )
}
