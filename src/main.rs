// Class Schedule Application
// Main entry point

use class_schedule::services::settings::SettingsService;
use class_schedule::ui_egui::ScheduleApp;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Class Schedule");

    let settings_service = SettingsService::new();
    if let Err(err) = settings_service.initialize_if_missing() {
        log::warn!("Could not write default config: {:#}", err);
    }
    let settings = match settings_service.load() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Failed to load settings: {:#}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Class Schedule")
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Class Schedule",
        options,
        Box::new(move |cc| {
            let app = ScheduleApp::new(cc, settings)?;
            Ok(Box::new(app))
        }),
    )
}
