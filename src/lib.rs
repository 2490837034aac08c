//! Desktop landing page for the Faculty of Engineering anniversary week.
//!
//! The window shows a tab bar (home plus one tab per weekday), the events of
//! the selected day with auto-advancing image carousels, and links out to
//! Facebook and YouTube.

slint::include_modules!();

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod file_utils;
pub mod image_cache;
pub mod image_loader;
pub mod services;
pub mod startup;
pub mod state;
pub mod ui;
