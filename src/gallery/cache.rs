// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by slides and thumbnails.
//!
//! - **LRU eviction**: least recently used images go first
//! - **Memory-bounded**: total decoded size stays under a byte limit
//! - **Reference-keyed**: entries are indexed by [`ImageRef`]
//!
//! Revisiting a slide or reopening a gallery is served from here instead of
//! decoding again. Stale load completions still land in the cache.

use super::loader::ImageData;
use super::trigger::ImageRef;
use crate::config::{DEFAULT_CACHE_MAX_IMAGES, GalleryConfig};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters exposed for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

pub struct ImageCache {
    cache: LruCache<ImageRef, CacheEntry>,
    max_bytes: usize,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(max_images: usize, max_bytes: usize) -> Self {
        let capacity = NonZeroUsize::new(max_images)
            .or_else(|| NonZeroUsize::new(DEFAULT_CACHE_MAX_IMAGES))
            .unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            max_bytes,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(config.cache_max_images(), config.cache_max_bytes())
    }

    /// Inserts an image. Returns `false` if it is too large to be worth caching
    /// (more than half the byte budget).
    pub fn insert(&mut self, source: ImageRef, image: ImageData) -> bool {
        let size_bytes = image.size_bytes();
        if size_bytes > self.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&source) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.max_bytes {
            match self.cache.pop_lru() {
                Some((_, evicted)) => {
                    self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                    self.stats.evictions += 1;
                }
                None => break,
            }
        }

        // `push` reports the entry displaced by the count limit.
        if let Some((_, evicted)) = self.cache.push(source, CacheEntry { image, size_bytes }) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += size_bytes;
        true
    }

    /// Looks up an image and marks it as recently used.
    pub fn get(&mut self, source: &ImageRef) -> Option<ImageData> {
        match self.cache.get(source) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry.image.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Checks for an entry without touching LRU order or counters.
    #[must_use]
    pub fn contains(&self, source: &ImageRef) -> bool {
        self.cache.contains(source)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::from_config(&GalleryConfig::default())
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.max_bytes)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn image(width: u32, height: u32) -> ImageData {
        ImageData::from_rgba(width, height, vec![0u8; (width * height * 4) as usize])
    }

    fn key(name: &str) -> ImageRef {
        ImageRef::Local(PathBuf::from(name))
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ImageCache::new(4, 1024 * 1024);
        assert!(cache.insert(key("a.png"), image(10, 10)));

        let hit = cache.get(&key("a.png")).expect("cached");
        assert_eq!(hit.width, 10);
        assert!(cache.get(&key("b.png")).is_none());
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn count_limit_evicts_least_recent() {
        let mut cache = ImageCache::new(2, 1024 * 1024);
        cache.insert(key("a"), image(4, 4));
        cache.insert(key("b"), image(4, 4));
        cache.get(&key("a"));
        cache.insert(key("c"), image(4, 4));

        assert!(cache.contains(&key("a")));
        assert!(!cache.contains(&key("b")));
        assert_eq!(cache.memory_usage(), 2 * 64);
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn byte_limit_evicts_until_it_fits() {
        // Each 16x16 image is 1 KiB; budget fits three.
        let mut cache = ImageCache::new(16, 3 * 1024);
        for name in ["a", "b", "c", "d"] {
            assert!(cache.insert(key(name), image(16, 16)));
        }
        assert_eq!(cache.len(), 3);
        assert!(!cache.contains(&key("a")));
        assert!(cache.memory_usage() <= 3 * 1024);
    }

    #[test]
    fn oversized_images_are_not_cached() {
        let mut cache = ImageCache::new(4, 1024);
        assert!(!cache.insert(key("huge"), image(32, 32)));
        assert!(cache.is_empty());
    }

    #[test]
    fn reinserting_replaces_size_accounting() {
        let mut cache = ImageCache::new(4, 1024 * 1024);
        cache.insert(key("a"), image(8, 8));
        cache.insert(key("a"), image(4, 4));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.memory_usage(), 64);

        cache.clear();
        assert_eq!(cache.memory_usage(), 0);
    }
}
