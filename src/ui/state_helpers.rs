//! Helper functions to set grouped ViewState properties and patch model rows.

use crate::{EventCard, Greeting};
use log::error;
use slint::{ComponentHandle, Model};

/// Page generations travel through the `.slint` side as `int`.
pub fn generation_to_ui(generation: u64) -> i32 {
    generation as i32
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>().set_error_message("".into());
}

/// Sets the properties that switch between the home page and a day page.
///
/// Groups: selected-tab, home-selected, page-generation
pub fn set_page_info(ui: &crate::AppWindow, tab: usize, home: bool, generation: u64) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_selected_tab(tab as i32);
    view_state.set_home_selected(home);
    view_state.set_page_generation(generation_to_ui(generation));
}

/// Whether results tagged with `generation` still belong to the visible page.
pub fn is_current_page(ui: &crate::AppWindow, generation: u64) -> bool {
    ui.global::<crate::ViewState>().get_page_generation() == generation_to_ui(generation)
}

/// Applies `update` to one row of the events model. Returns false if the row is gone.
pub fn update_event_row(
    ui: &crate::AppWindow,
    row: usize,
    update: impl FnOnce(&mut EventCard),
) -> bool {
    let events = ui.global::<crate::ViewState>().get_events();
    let Some(mut card) = events.row_data(row) else {
        return false;
    };
    update(&mut card);
    events.set_row_data(row, card);
    true
}

/// Reads one row of the events model.
pub fn event_row(ui: &crate::AppWindow, row: usize) -> Option<EventCard> {
    ui.global::<crate::ViewState>().get_events().row_data(row)
}

/// Applies `update` to one row of the greetings model. Returns false if the row is gone.
pub fn update_greeting_row(
    ui: &crate::AppWindow,
    row: usize,
    update: impl FnOnce(&mut Greeting),
) -> bool {
    let greetings = ui.global::<crate::ViewState>().get_greetings();
    let Some(mut greeting) = greetings.row_data(row) else {
        return false;
    };
    update(&mut greeting);
    greetings.set_row_data(row, greeting);
    true
}
