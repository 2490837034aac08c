//! Service layer for business logic.
//!
//! Separates carousel lifecycle and link handling from UI handlers for better testability.

pub mod carousel_service;
pub mod link_service;

pub use carousel_service::{CarouselBoard, SlideChange, SlideObserver};
pub use link_service::LinkService;
