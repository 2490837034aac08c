//! Image cache for fast slide changes.
//!
//! Caches decoded RGB8 image data using an LRU policy so that carousel slides
//! and revisited tabs display without decoding again.

use crate::image_loader::DecodedImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Cached image data. Pixels are shared so cache hits do not copy them.
#[derive(Clone)]
pub struct CachedImage {
    pub data: Arc<[u8]>,
    pub width: u32,
    pub height: u32,
}

impl From<DecodedImage> for CachedImage {
    fn from(decoded: DecodedImage) -> Self {
        Self {
            data: decoded.data.into(),
            width: decoded.width,
            height: decoded.height,
        }
    }
}

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedImage>,
}

impl ImageCache {
    /// Creates a new image cache; a zero capacity is bumped to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<CachedImage> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, cached_image: CachedImage) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            cached_image.width,
            cached_image.height
        );
        self.cache.put(path, cached_image);
    }

    /// Checks if an image is in the cache without touching its LRU position.
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(value: u8) -> CachedImage {
        CachedImage::from(DecodedImage {
            data: vec![value; 3],
            width: 1,
            height: 1,
        })
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = ImageCache::new(2);
        cache.put(PathBuf::from("a.jpg"), pixel(1));
        cache.put(PathBuf::from("b.jpg"), pixel(2));

        // touch a so b becomes the eviction candidate
        assert!(cache.get(Path::new("a.jpg")).is_some());
        cache.put(PathBuf::from("c.jpg"), pixel(3));

        assert!(cache.contains(Path::new("a.jpg")));
        assert!(!cache.contains(Path::new("b.jpg")));
        assert!(cache.contains(Path::new("c.jpg")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_still_holds_one_entry() {
        let mut cache = ImageCache::new(0);
        cache.put(PathBuf::from("a.jpg"), pixel(1));
        assert_eq!(cache.get(Path::new("a.jpg")).map(|img| img.data[0]), Some(1));
    }
}
