//! State management for the landing page.
//!
//! Everything except the image cache is owned by the Slint event loop thread,
//! so it lives behind `Rc<RefCell<..>>`. The cache is shared with rayon decoders.

use crate::config::AppConfig;
use crate::content::Schedule;
use crate::image_cache::ImageCache;
use crate::services::CarouselBoard;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub mod tabs;

pub use tabs::TabState;

/// Application-wide state container. Cloning shares the same state.
#[derive(Clone)]
pub struct AppState {
    pub config: Rc<AppConfig>,
    pub schedule: Rc<Schedule>,
    pub tabs: Rc<RefCell<TabState>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
    /// Carousels mounted for the visible page, with their auto-advance timers.
    pub carousels: Rc<RefCell<CarouselBoard>>,
}

impl AppState {
    pub fn new(config: AppConfig, schedule: Schedule) -> Self {
        let tabs = TabState::new(schedule.tab_labels());
        let cache = ImageCache::new(config.cache_capacity);
        let board = CarouselBoard::new(config.auto_advance_interval);
        Self {
            config: Rc::new(config),
            schedule: Rc::new(schedule),
            tabs: Rc::new(RefCell::new(tabs)),
            image_cache: Arc::new(Mutex::new(cache)),
            carousels: Rc::new(RefCell::new(board)),
        }
    }
}
