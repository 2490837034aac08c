//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding operations,
//! then `slint::invoke_from_event_loop` to update UI from the background thread.
//! Every result is checked against the page generation (and, for slides, the
//! slide index) before it is shown, so late decodes never overwrite newer content.

use crate::config::SLIDE_FADE_OUT;
use crate::content::ImageRef;
use crate::error::AppError;
use crate::file_utils::{self, PathExt};
use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::services::SlideChange;
use crate::state::AppState;
use crate::ui::state_helpers::{
    event_row, generation_to_ui, is_current_page, update_event_row, update_greeting_row,
};
use log::{debug, warn};
use slint::ComponentHandle;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Header logo position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoSide {
    Left,
    Right,
}

/// Where a decoded image ends up.
#[derive(Debug, Clone)]
pub enum ImageTarget {
    /// Current slide of a mounted carousel.
    Slide(SlideChange),
    /// Single image of the event in `row`.
    EventImage { generation: u64, row: usize },
    /// Portrait of the greeting in `row` on the home page.
    Portrait { generation: u64, row: usize },
    Logo(LogoSide),
}

impl ImageTarget {
    fn error_prefix(&self) -> &'static str {
        match self {
            ImageTarget::Slide(_) => "Failed to load slide",
            ImageTarget::EventImage { .. } => "Failed to load event image",
            ImageTarget::Portrait { .. } => "Failed to load portrait",
            ImageTarget::Logo(_) => "Failed to load logo",
        }
    }
}

/// Images that already failed to load.
///
/// Carousels retry the same slide on every lap, so only the first failure of
/// an image is logged as a warning; repeats go to the debug log.
#[derive(Debug, Default)]
pub struct FailedImages(HashSet<ImageRef>);

impl FailedImages {
    /// Records a failure of `image`. Returns true the first time.
    pub fn record(&mut self, image: &ImageRef) -> bool {
        self.0.insert(image.clone())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Logs an image failure, warning only the first time `image` fails.
fn report_failure(
    failed: &Mutex<FailedImages>,
    target: &ImageTarget,
    image: &ImageRef,
    error: &AppError,
) -> bool {
    let first = failed
        .lock()
        .map(|mut failed| failed.record(image))
        .unwrap_or(true);
    if first {
        warn!("{} {}: {}", target.error_prefix(), image.as_str(), error);
    } else {
        debug!("{} {} again: {}", target.error_prefix(), image.as_str(), error);
    }
    first
}

/// Whether a decoded slide still matches what the carousel row shows.
pub fn slide_is_current(page_generation: i32, slide_index: i32, change: &SlideChange) -> bool {
    page_generation == generation_to_ui(change.generation) && slide_index == change.cursor as i32
}

/// Whether `target` still has a place in the visible page.
fn target_is_current(ui: &crate::AppWindow, target: &ImageTarget) -> bool {
    match target {
        ImageTarget::Slide(change) => {
            let page_generation = ui.global::<crate::ViewState>().get_page_generation();
            event_row(ui, change.row)
                .is_some_and(|card| slide_is_current(page_generation, card.slide_index, change))
        }
        ImageTarget::EventImage { generation, .. } | ImageTarget::Portrait { generation, .. } => {
            is_current_page(ui, *generation)
        }
        ImageTarget::Logo(_) => true,
    }
}

/// Puts a decoded image into the model slot named by `target`.
fn update_ui_with_image(ui: &crate::AppWindow, target: &ImageTarget, cached: &CachedImage) {
    if !target_is_current(ui, target) {
        debug!("Dropping stale image for {:?}", target);
        return;
    }

    let image = image_loader::create_slint_image(&cached.data, cached.width, cached.height);
    match target {
        ImageTarget::Slide(SlideChange { row, .. }) | ImageTarget::EventImage { row, .. } => {
            update_event_row(ui, *row, |card| {
                card.image = image;
                card.image_visible = true;
                card.image_error = false;
            });
        }
        ImageTarget::Portrait { row, .. } => {
            update_greeting_row(ui, *row, |greeting| {
                greeting.portrait = image;
                greeting.portrait_visible = true;
            });
        }
        ImageTarget::Logo(LogoSide::Left) => {
            ui.global::<crate::ViewState>().set_left_logo(image);
        }
        ImageTarget::Logo(LogoSide::Right) => {
            ui.global::<crate::ViewState>().set_right_logo(image);
        }
    }
}

/// Marks the slot as failed. The row shows its placeholder; the error banner
/// is left alone since nothing the user did caused the failure.
fn update_ui_with_error(
    ui: &crate::AppWindow,
    target: &ImageTarget,
    image: &ImageRef,
    error: AppError,
    failed: &Mutex<FailedImages>,
) {
    if !target_is_current(ui, target) {
        return;
    }
    report_failure(failed, target, image, &error);

    match target {
        ImageTarget::Slide(SlideChange { row, .. }) | ImageTarget::EventImage { row, .. } => {
            update_event_row(ui, *row, |card| {
                card.image = slint::Image::default();
                card.image_visible = false;
                card.image_error = true;
            });
        }
        ImageTarget::Portrait { row, .. } => {
            update_greeting_row(ui, *row, |greeting| {
                greeting.portrait = slint::Image::default();
                greeting.portrait_visible = false;
            });
        }
        ImageTarget::Logo(_) => {}
    }
}

/// Decodes `path` and stores the result in the cache.
fn decode_into_cache(path: &Path, cache: &Mutex<ImageCache>) -> Result<CachedImage, AppError> {
    let cached = CachedImage::from(image_loader::load_image_blocking(path)?);
    if let Ok(mut cache) = cache.lock() {
        cache.put(path.to_path_buf(), cached.clone());
    }
    Ok(cached)
}

/// Loads images for the visible page and routes them into the UI models.
#[derive(Clone)]
pub struct ImageDisplay {
    ui: slint::Weak<crate::AppWindow>,
    cache: Arc<Mutex<ImageCache>>,
    failed: Arc<Mutex<FailedImages>>,
    asset_root: PathBuf,
}

impl ImageDisplay {
    pub fn new(ui: &crate::AppWindow, state: &AppState) -> Self {
        Self {
            ui: ui.as_weak(),
            cache: state.image_cache.clone(),
            failed: Arc::new(Mutex::new(FailedImages::default())),
            asset_root: state.config.asset_root.clone(),
        }
    }

    /// Shows `image` in `target`.
    ///
    /// This function:
    /// 1. Resolves the reference inside the asset root
    /// 2. Checks the cache first for instant display
    /// 3. If cache miss, spawns a rayon thread to decode the image
    /// 4. Uses invoke_from_event_loop to return to the UI thread
    pub fn show(&self, image: &ImageRef, target: ImageTarget) {
        let path = match file_utils::resolve_asset(&self.asset_root, image) {
            Ok(path) => path,
            Err(error) => {
                if let Some(ui) = self.ui.upgrade() {
                    update_ui_with_error(&ui, &target, image, error, &self.failed);
                }
                return;
            }
        };

        let cached = self.cache.lock().ok().and_then(|mut c| c.get(&path));
        if let Some(cached_image) = cached {
            if let Some(ui) = self.ui.upgrade() {
                update_ui_with_image(&ui, &target, &cached_image);
            }
            return;
        }

        let ui = self.ui.clone();
        let cache = self.cache.clone();
        let failed = self.failed.clone();
        let image = image.clone();
        rayon::spawn(move || {
            let result = decode_into_cache(&path, &cache);
            debug!("Decode finished for {}", path.format_for_log());

            let _ = slint::invoke_from_event_loop(move || {
                if let Some(ui) = ui.upgrade() {
                    match result {
                        Ok(cached_image) => update_ui_with_image(&ui, &target, &cached_image),
                        Err(error) => update_ui_with_error(&ui, &target, &image, error, &failed),
                    }
                }
            });
        });
    }

    /// Moves a carousel row to a new slide with a fade.
    ///
    /// The dots and counter update at once; the picture fades out, is swapped
    /// after [`SLIDE_FADE_OUT`] and fades back in when the decode lands.
    pub fn change_slide(&self, change: SlideChange) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };
        if !is_current_page(&ui, change.generation) {
            return;
        }

        update_event_row(&ui, change.row, |card| {
            card.slide_index = change.cursor as i32;
            card.slide_count = change.count as i32;
            card.image_visible = false;
        });
        self.preload(&change.neighbours);

        let display = self.clone();
        slint::Timer::single_shot(SLIDE_FADE_OUT, move || {
            let image = change.image.clone();
            display.show(&image, ImageTarget::Slide(change));
        });
    }

    /// Decodes images into the cache ahead of time. Failures are ignored here
    /// and reported when the image is actually shown.
    pub fn preload(&self, images: &[ImageRef]) {
        for image in images {
            let Ok(path) = file_utils::resolve_asset(&self.asset_root, image) else {
                continue;
            };

            let should_load = self
                .cache
                .lock()
                .ok()
                .map(|c| !c.contains(&path))
                .unwrap_or(false);

            if should_load {
                let cache = self.cache.clone();
                rayon::spawn(move || {
                    let _ = decode_into_cache(&path, &cache);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(generation: u64, cursor: usize) -> SlideChange {
        SlideChange {
            generation,
            row: 0,
            cursor,
            count: 4,
            image: ImageRef::new("/B.jpg"),
            neighbours: Vec::new(),
        }
    }

    #[test]
    fn slide_matches_generation_and_index() {
        assert!(slide_is_current(3, 1, &change(3, 1)));
        assert!(!slide_is_current(4, 1, &change(3, 1)));
        assert!(!slide_is_current(3, 2, &change(3, 1)));
    }

    #[test]
    fn repeated_failures_warn_once_per_image() {
        let failed = Mutex::new(FailedImages::default());
        let missing = ImageRef::new("/CONFRENCIA1JUVES}.jpg");
        let error = AppError::AssetNotFound(PathBuf::from("public/CONFRENCIA1JUVES}.jpg"));
        let target = ImageTarget::Slide(change(1, 0));

        assert!(report_failure(&failed, &target, &missing, &error));
        for _ in 0..5 {
            assert!(!report_failure(&failed, &target, &missing, &error));
        }
        assert!(report_failure(
            &failed,
            &target,
            &ImageRef::new("/HIMNO.jpg"),
            &error
        ));
        assert_eq!(failed.lock().unwrap().len(), 2);
    }

    #[test]
    fn every_target_names_its_failure() {
        let targets = [
            ImageTarget::Slide(change(1, 0)),
            ImageTarget::EventImage {
                generation: 1,
                row: 0,
            },
            ImageTarget::Portrait {
                generation: 1,
                row: 0,
            },
            ImageTarget::Logo(LogoSide::Left),
        ];
        for target in &targets {
            assert!(target.error_prefix().starts_with("Failed to load"));
        }
    }
}
