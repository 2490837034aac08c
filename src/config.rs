//! Application configuration constants.

use std::path::PathBuf;
use std::time::Duration;

/// Supported image file extensions for local assets.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Interval between automatic carousel advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// Time the outgoing slide takes to fade out before the incoming one is swapped in.
/// The incoming fade is animated by the `.slint` side with the same duration.
pub const SLIDE_FADE_OUT: Duration = Duration::from_millis(300);

/// Number of decoded images kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 24;

/// Asset directory used when none is passed on the command line.
pub const DEFAULT_ASSET_DIR: &str = "public";

/// Runtime configuration assembled at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory that site-relative image references (`/BANDA.jpg`) resolve against.
    pub asset_root: PathBuf,
    pub auto_advance_interval: Duration,
    pub cache_capacity: usize,
}

impl AppConfig {
    pub fn new(asset_root: PathBuf) -> Self {
        Self {
            asset_root,
            auto_advance_interval: AUTO_ADVANCE_INTERVAL,
            cache_capacity: IMAGE_CACHE_CAPACITY,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_ASSET_DIR))
    }
}
