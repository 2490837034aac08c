// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use slint::ComponentHandle;
use slint_engineering_week::config::AppConfig;
use slint_engineering_week::content::Schedule;
use slint_engineering_week::state::AppState;
use slint_engineering_week::ui::ImageDisplay;
use slint_engineering_week::{AppWindow, startup, ui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = AppConfig::new(startup::asset_root_from_args(std::env::args_os()));
    let schedule = Schedule::engineering_week_2025()?;

    let app = AppWindow::new()?;
    let app_state = AppState::new(config, schedule);
    let display = ImageDisplay::new(&app, &app_state);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state, &display);
    startup::configure_startup(&app, &app_state, &display)?;

    app.run()?;

    app_state.carousels.borrow_mut().unmount_all();
    Ok(())
}
