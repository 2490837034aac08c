//! Carousel state: an ordered image list and a cursor that wraps in both directions.
//!
//! The struct itself is timer-free; `services::carousel_service` owns the repeating
//! timer that drives [`Carousel::tick`] while the carousel is mounted.

use crate::content::ImageRef;
use log::debug;
use std::fmt;

/// Errors raised by carousel operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one image.
    EmptyImageList,
    /// Jump target outside `[0, len)`.
    SlideOutOfRange { index: usize, len: usize },
    /// Manual navigation on a carousel that was already torn down.
    Unmounted,
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyImageList => write!(f, "carousel image list is empty"),
            Self::SlideOutOfRange { index, len } => {
                write!(f, "slide {} is out of range for {} images", index, len)
            }
            Self::Unmounted => write!(f, "carousel is no longer mounted"),
        }
    }
}

impl std::error::Error for CarouselError {}

/// Non-empty, ordered list of image references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageList(Vec<ImageRef>);

impl ImageList {
    pub fn new(images: Vec<ImageRef>) -> Result<Self, CarouselError> {
        if images.is_empty() {
            return Err(CarouselError::EmptyImageList);
        }
        Ok(Self(images))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always at least one element; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.0.iter()
    }
}

/// Direction for single-step navigation.
#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Backward,
}

/// Cursor over an [`ImageList`].
#[derive(Debug, Clone)]
pub struct Carousel {
    images: ImageList,
    cursor: usize,
    mounted: bool,
}

impl Carousel {
    /// Creates a mounted carousel showing the first image.
    pub fn new(images: ImageList) -> Self {
        Self {
            images,
            cursor: 0,
            mounted: true,
        }
    }

    /// Builds the image list and mounts a carousel over it.
    pub fn initialize(images: Vec<ImageRef>) -> Result<Self, CarouselError> {
        ImageList::new(images).map(Self::new)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    /// The image under the cursor.
    pub fn current_image(&self) -> &ImageRef {
        // cursor < len is maintained by every mutation
        &self.images.0[self.cursor]
    }

    /// Image `offset` positions away from the cursor, wrapping.
    pub fn peek(&self, offset: isize) -> &ImageRef {
        let len = self.len() as isize;
        let index = (self.cursor as isize + offset).rem_euclid(len) as usize;
        &self.images.0[index]
    }

    /// Distinct images next to the current one (following first), for preloading.
    pub fn neighbours(&self) -> Vec<ImageRef> {
        let current = self.current_image();
        let mut images: Vec<ImageRef> = Vec::with_capacity(2);
        for candidate in [self.peek(1), self.peek(-1)] {
            if candidate != current && !images.contains(candidate) {
                images.push(candidate.clone());
            }
        }
        images
    }

    fn wrapped(&self, step: Step) -> usize {
        let len = self.len();
        match step {
            Step::Forward => (self.cursor + 1) % len,
            Step::Backward => (self.cursor + len - 1) % len,
        }
    }

    /// Timer-driven advance. Returns the new cursor, or `None` once torn down.
    pub fn tick(&mut self) -> Option<usize> {
        if !self.mounted {
            debug!("Ignoring tick on unmounted carousel");
            return None;
        }
        self.cursor = self.wrapped(Step::Forward);
        Some(self.cursor)
    }

    pub fn next(&mut self) -> Result<usize, CarouselError> {
        self.ensure_mounted()?;
        self.cursor = self.wrapped(Step::Forward);
        Ok(self.cursor)
    }

    pub fn previous(&mut self) -> Result<usize, CarouselError> {
        self.ensure_mounted()?;
        self.cursor = self.wrapped(Step::Backward);
        Ok(self.cursor)
    }

    /// Jumps straight to `index`. Out-of-range targets leave the cursor untouched.
    pub fn go_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        self.ensure_mounted()?;
        if index >= self.len() {
            return Err(CarouselError::SlideOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.cursor = index;
        Ok(self.cursor)
    }

    /// Swaps the image list, pulling the cursor back into range if the list shrank.
    pub fn replace_images(&mut self, images: ImageList) {
        self.images = images;
        if self.cursor >= self.images.len() {
            self.cursor = self.images.len() - 1;
        }
    }

    /// Stops the carousel; later ticks are ignored and manual moves fail.
    pub fn teardown(&mut self) {
        self.mounted = false;
    }

    fn ensure_mounted(&self) -> Result<(), CarouselError> {
        if self.mounted {
            Ok(())
        } else {
            Err(CarouselError::Unmounted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<ImageRef> {
        names.iter().map(|name| ImageRef::new(*name)).collect()
    }

    fn abcd() -> Carousel {
        Carousel::initialize(refs(&["/A.jpg", "/B.jpg", "/C.jpg", "/D.jpg"])).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            Carousel::initialize(Vec::new()).unwrap_err(),
            CarouselError::EmptyImageList
        );
    }

    #[test]
    fn scenario_from_mount_to_jump() {
        let mut carousel = abcd();
        assert_eq!(carousel.cursor(), 0);
        assert_eq!(carousel.current_image().as_str(), "/A.jpg");

        for _ in 0..3 {
            carousel.tick();
        }
        assert_eq!(carousel.cursor(), 3);
        assert_eq!(carousel.current_image().as_str(), "/D.jpg");

        assert_eq!(carousel.tick(), Some(0));
        assert_eq!(carousel.current_image().as_str(), "/A.jpg");

        assert_eq!(carousel.previous(), Ok(3));
        assert_eq!(carousel.current_image().as_str(), "/D.jpg");

        assert_eq!(carousel.go_to(1), Ok(1));
        assert_eq!(carousel.current_image().as_str(), "/B.jpg");
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            let names: Vec<String> = (0..len).map(|i| format!("/{i}.jpg")).collect();
            let images = names.iter().map(|n| ImageRef::new(n.as_str())).collect();
            let mut carousel = Carousel::initialize(images).unwrap();
            for _ in 0..len {
                carousel.next().unwrap();
            }
            assert_eq!(carousel.cursor(), 0, "len {len}");
        }
    }

    #[test]
    fn next_and_previous_are_inverse() {
        let mut carousel = abcd();
        for start in 0..carousel.len() {
            carousel.go_to(start).unwrap();
            carousel.next().unwrap();
            carousel.previous().unwrap();
            assert_eq!(carousel.cursor(), start);

            carousel.previous().unwrap();
            carousel.next().unwrap();
            assert_eq!(carousel.cursor(), start);
        }
    }

    #[test]
    fn single_image_stays_put() {
        let mut carousel = Carousel::initialize(refs(&["/ONLY.jpg"])).unwrap();
        assert_eq!(carousel.tick(), Some(0));
        assert_eq!(carousel.next(), Ok(0));
        assert_eq!(carousel.previous(), Ok(0));
    }

    #[test]
    fn out_of_range_jump_leaves_cursor() {
        let mut carousel = abcd();
        carousel.go_to(2).unwrap();
        assert_eq!(
            carousel.go_to(4),
            Err(CarouselError::SlideOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn cursor_stays_in_range_for_mixed_operations() {
        let mut carousel = abcd();
        let script = [0usize, 1, 2, 3, 1, 1, 0, 2, 3, 3, 2, 0];
        for (i, op) in script.iter().enumerate() {
            match op {
                0 => {
                    carousel.tick();
                }
                1 => {
                    carousel.next().unwrap();
                }
                2 => {
                    carousel.previous().unwrap();
                }
                _ => {
                    carousel.go_to(i % carousel.len()).unwrap();
                }
            }
            assert!(carousel.cursor() < carousel.len());
        }
    }

    #[test]
    fn teardown_freezes_state() {
        let mut carousel = abcd();
        carousel.go_to(2).unwrap();
        carousel.teardown();

        assert!(!carousel.is_mounted());
        assert_eq!(carousel.tick(), None);
        assert_eq!(carousel.cursor(), 2);
        assert_eq!(carousel.next(), Err(CarouselError::Unmounted));
        assert_eq!(carousel.go_to(0), Err(CarouselError::Unmounted));
        assert_eq!(carousel.cursor(), 2);
    }

    #[test]
    fn shrinking_list_reclamps_cursor() {
        let mut carousel = abcd();
        carousel.go_to(3).unwrap();
        carousel.replace_images(ImageList::new(refs(&["/X.jpg", "/Y.jpg"])).unwrap());
        assert_eq!(carousel.cursor(), 1);
        assert_eq!(carousel.current_image().as_str(), "/Y.jpg");

        carousel.replace_images(ImageList::new(refs(&["/X.jpg", "/Y.jpg", "/Z.jpg"])).unwrap());
        assert_eq!(carousel.cursor(), 1);
    }

    #[test]
    fn peek_wraps_around() {
        let carousel = abcd();
        assert_eq!(carousel.peek(-1).as_str(), "/D.jpg");
        assert_eq!(carousel.peek(1).as_str(), "/B.jpg");
        assert_eq!(carousel.peek(5).as_str(), "/B.jpg");
    }

    #[test]
    fn neighbours_skip_current_and_duplicates() {
        let names = |images: Vec<ImageRef>| -> Vec<String> {
            images.iter().map(|i| i.as_str().to_string()).collect()
        };

        assert_eq!(names(abcd().neighbours()), vec!["/B.jpg", "/D.jpg"]);

        let pair = Carousel::initialize(refs(&["/X.jpg", "/Y.jpg"])).unwrap();
        assert_eq!(names(pair.neighbours()), vec!["/Y.jpg"]);

        let single = Carousel::initialize(refs(&["/X.jpg"])).unwrap();
        assert!(single.neighbours().is_empty());
    }
}
