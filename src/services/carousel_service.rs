//! Service that mounts the carousels of the visible page and drives their timers.
//!
//! Each carousel event gets its own [`Carousel`] and its own repeating
//! `slint::Timer`. Switching pages tears every carousel down and stops its timer
//! before the next page is mounted, so no tick can reach a carousel that is
//! no longer on screen.

use crate::carousel::{Carousel, CarouselError};
use crate::content::{EventRecord, ImageRef, Media};
use crate::error::Result;
use log::{debug, info};
use slint::{Timer, TimerMode};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// A carousel moved to a new slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideChange {
    /// Page mount this change belongs to.
    pub generation: u64,
    /// Row of the event within the page.
    pub row: usize,
    pub cursor: usize,
    pub count: usize,
    pub image: ImageRef,
    /// Slides adjacent to `image`, worth decoding ahead of time.
    pub neighbours: Vec<ImageRef>,
}

/// Receives slide changes produced by auto-advance ticks.
pub type SlideObserver = Rc<dyn Fn(SlideChange)>;

struct MountedCarousel {
    carousel: Rc<RefCell<Carousel>>,
    timer: Option<Timer>,
}

impl MountedCarousel {
    fn teardown(mut self) {
        self.carousel.borrow_mut().teardown();
        if let Some(timer) = self.timer.take() {
            timer.stop();
        }
    }
}

fn snapshot(carousel: &Carousel, generation: u64, row: usize) -> SlideChange {
    SlideChange {
        generation,
        row,
        cursor: carousel.cursor(),
        count: carousel.len(),
        image: carousel.current_image().clone(),
        neighbours: carousel.neighbours(),
    }
}

/// Timer body: advances one slide unless the carousel was torn down meanwhile.
fn advance(carousel: &RefCell<Carousel>, generation: u64, row: usize) -> Option<SlideChange> {
    let mut carousel = carousel.borrow_mut();
    carousel.tick()?;
    Some(snapshot(&carousel, generation, row))
}

/// Carousels of the currently mounted page, indexed by event row.
pub struct CarouselBoard {
    interval: Duration,
    generation: u64,
    slots: Vec<Option<MountedCarousel>>,
}

impl CarouselBoard {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation: 0,
            slots: Vec::new(),
        }
    }

    /// Counter bumped on every mount; async work tagged with an older value is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of carousels currently mounted.
    pub fn mounted_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Replaces the mounted page with `events` and returns the new generation.
    ///
    /// With an observer, every carousel starts auto-advancing and reports each tick to it.
    pub fn mount_page(&mut self, events: &[EventRecord], observer: Option<SlideObserver>) -> u64 {
        self.unmount_all();
        self.generation += 1;
        let generation = self.generation;

        self.slots = events
            .iter()
            .enumerate()
            .map(|(row, event)| match &event.media {
                Media::Carousel(images) => {
                    let carousel = Rc::new(RefCell::new(Carousel::new(images.clone())));
                    let timer = observer
                        .as_ref()
                        .map(|observer| self.start_timer(&carousel, generation, row, observer));
                    Some(MountedCarousel { carousel, timer })
                }
                Media::Single(_) => None,
            })
            .collect();

        info!(
            "Mounted page generation {} with {} carousel(s)",
            generation,
            self.mounted_count()
        );
        generation
    }

    fn start_timer(
        &self,
        carousel: &Rc<RefCell<Carousel>>,
        generation: u64,
        row: usize,
        observer: &SlideObserver,
    ) -> Timer {
        let timer = Timer::default();
        let carousel = Rc::clone(carousel);
        let observer = Rc::clone(observer);
        timer.start(TimerMode::Repeated, self.interval, move || {
            // borrow is released inside advance() before the observer runs
            if let Some(change) = advance(&carousel, generation, row) {
                observer(change);
            }
        });
        timer
    }

    /// Tears down every mounted carousel and cancels its timer.
    pub fn unmount_all(&mut self) {
        let count = self.mounted_count();
        for slot in self.slots.drain(..).flatten() {
            slot.teardown();
        }
        if count > 0 {
            debug!(
                "Unmounted {} carousel(s) of generation {}",
                count, self.generation
            );
        }
    }

    fn slot(&self, row: usize) -> Result<&Rc<RefCell<Carousel>>> {
        self.slots
            .get(row)
            .and_then(Option::as_ref)
            .map(|slot| &slot.carousel)
            .ok_or_else(|| CarouselError::Unmounted.into())
    }

    fn apply(
        &self,
        row: usize,
        op: impl FnOnce(&mut Carousel) -> std::result::Result<usize, CarouselError>,
    ) -> Result<SlideChange> {
        let mut carousel = self.slot(row)?.borrow_mut();
        op(&mut carousel)?;
        Ok(snapshot(&carousel, self.generation, row))
    }

    pub fn next(&self, row: usize) -> Result<SlideChange> {
        self.apply(row, Carousel::next)
    }

    pub fn previous(&self, row: usize) -> Result<SlideChange> {
        self.apply(row, Carousel::previous)
    }

    pub fn go_to(&self, row: usize, index: usize) -> Result<SlideChange> {
        self.apply(row, |carousel| carousel.go_to(index))
    }

    /// Current slide of the carousel at `row`, if that row holds one.
    pub fn current(&self, row: usize) -> Option<SlideChange> {
        let carousel = self.slot(row).ok()?.borrow();
        Some(snapshot(&carousel, self.generation, row))
    }
}

impl Drop for CarouselBoard {
    fn drop(&mut self) {
        self.unmount_all();
    }
}
