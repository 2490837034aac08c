//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (select_tab, carousel_next, open_link, etc.).
//! Everything here runs on the Slint event loop, so carousel moves and timer
//! ticks are serialized and the last one wins.

use crate::error::Result;
use crate::services::{LinkService, SlideChange};
use crate::state::AppState;
use crate::ui::image_display::ImageDisplay;
use crate::ui::page_view::show_tab;
use log::{debug, warn};
use slint::ComponentHandle;

/// Applies a manual carousel move, or logs why it was refused.
fn apply_slide_move(display: &ImageDisplay, result: Result<SlideChange>) {
    match result {
        Ok(change) => display.change_slide(change),
        Err(e) => warn!("Carousel navigation refused: {}", e),
    }
}

/// Switches tab and reports failures in the error banner.
fn switch_tab(ui: &crate::AppWindow, state: &AppState, display: &ImageDisplay, tab: usize) {
    if let Err(e) = show_tab(ui, state, display, tab) {
        crate::ui::set_error_with_prefix(ui, "Failed to switch tab", e.to_string());
    }
}

/// Sets up all UI event handlers for the application.
///
/// Takes the UI handle and shared state, then registers callbacks for tab
/// selection, carousel navigation, and external links.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState, display: &ImageDisplay) {
    let logic = ui.global::<crate::Logic>();

    // Tab selection handler
    logic.on_select_tab({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        let display = display.clone();
        move |tab| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let Ok(tab) = usize::try_from(tab) else {
                warn!("Ignoring negative tab index {}", tab);
                return;
            };
            // reselecting keeps the mounted carousels where they are
            if state.tabs.borrow().is_selected(tab) {
                debug!("Tab {} is already shown", tab);
                return;
            }
            switch_tab(&ui, &state, &display, tab);
        }
    });

    // Keyboard tab stepping
    logic.on_next_tab({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        let display = display.clone();
        move || {
            let next = state.tabs.borrow_mut().next_tab();
            if let (Some(ui), Some(tab)) = (ui_handle.upgrade(), next) {
                switch_tab(&ui, &state, &display, tab);
            }
        }
    });

    logic.on_previous_tab({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        let display = display.clone();
        move || {
            let previous = state.tabs.borrow_mut().previous_tab();
            if let (Some(ui), Some(tab)) = (ui_handle.upgrade(), previous) {
                switch_tab(&ui, &state, &display, tab);
            }
        }
    });

    // Carousel handlers; they do not touch the auto-advance timer
    logic.on_carousel_next({
        let state = state.clone();
        let display = display.clone();
        move |row| {
            let result = state.carousels.borrow().next(row as usize);
            apply_slide_move(&display, result);
        }
    });

    logic.on_carousel_previous({
        let state = state.clone();
        let display = display.clone();
        move |row| {
            let result = state.carousels.borrow().previous(row as usize);
            apply_slide_move(&display, result);
        }
    });

    logic.on_carousel_go_to({
        let state = state.clone();
        let display = display.clone();
        move |row, index| {
            let result = state
                .carousels
                .borrow()
                .go_to(row as usize, index as usize);
            apply_slide_move(&display, result);
        }
    });

    // External link handler
    logic.on_open_link({
        let ui_handle = ui.as_weak();
        move |url| {
            if let Err(e) = LinkService::new().open(&url) {
                if let Some(ui) = ui_handle.upgrade() {
                    crate::ui::set_error_with_prefix(&ui, "Failed to open link", e.to_string());
                }
            }
        }
    });

    logic.on_dismiss_error({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                crate::ui::clear_error(&ui);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::content::Schedule;
    use slint::Model;

    #[test]
    fn reselecting_a_day_keeps_carousel_positions() {
        i_slint_backend_testing::init_no_event_loop();
        let assets = tempfile::tempdir().unwrap();
        let app = crate::AppWindow::new().unwrap();
        let state = AppState::new(
            AppConfig::new(assets.path().to_path_buf()),
            Schedule::engineering_week_2025().unwrap(),
        );
        let display = ImageDisplay::new(&app, &state);
        setup_handlers(&app, &state, &display);
        crate::startup::configure_startup(&app, &state, &display).unwrap();

        let view = app.global::<crate::ViewState>();
        let logic = app.global::<crate::Logic>();
        assert!(view.get_home_selected());
        assert_eq!(view.get_tabs().row_count(), 6);

        logic.invoke_select_tab(1);
        assert!(!view.get_home_selected());
        assert_eq!(view.get_day_title().as_str(), "Lunes");
        let events = view.get_events();
        assert_eq!(events.row_count(), 5);
        let generation = view.get_page_generation();

        logic.invoke_carousel_go_to(0, 2);
        assert_eq!(events.row_data(0).unwrap().slide_index, 2);

        logic.invoke_select_tab(1);
        assert_eq!(view.get_page_generation(), generation);
        assert_eq!(
            state.carousels.borrow().current(0).map(|slide| slide.cursor),
            Some(2)
        );

        logic.invoke_select_tab(2);
        assert_eq!(view.get_page_generation(), generation + 1);
        assert_eq!(view.get_day_title().as_str(), "Martes");

        // every asset is missing: rows show placeholders, the banner stays empty
        assert!(view.get_events().row_data(0).unwrap().image_error);
        assert!(view.get_error_message().is_empty());
    }
}
