//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint event loop: tab state, carousels, and their `slint::Timer`s live here
//! - `rayon::spawn`: image decoding
//! - `slint::invoke_from_event_loop`: returns decode results from rayon to the UI thread

pub mod handlers;
pub mod image_display;
pub mod page_view;
mod state_helpers;

pub use handlers::setup_handlers;
pub use image_display::ImageDisplay;
pub use state_helpers::*;
