// SPDX-License-Identifier: MPL-2.0
//! Bounded in-memory cache of recipe images.
//!
//! Views only read the cache ([`ThumbnailCache::peek`]). The update loop
//! calls [`ThumbnailCache::request`] for each visible image: it refreshes
//! recency for cached images and tells the caller whether a download
//! should start. A URL is never downloaded twice concurrently.

use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Host whose images support the `/preview` thumbnail variant.
const MEALDB_IMAGE_HOST: &str = "themealdb.com/images/";

/// Smaller variant of a recipe image, when the host offers one.
pub fn preview_url(image: &str) -> String {
    if image.contains(MEALDB_IMAGE_HOST) && !image.ends_with("/preview") {
        format!("{image}/preview")
    } else {
        image.to_string()
    }
}

pub struct ThumbnailCache {
    entries: LruCache<String, Handle>,
    pending: HashSet<String>,
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("cached", &self.entries.len())
            .field("capacity", &self.entries.cap())
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl ThumbnailCache {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Returns `true` when `url` should be downloaded now.
    pub fn request(&mut self, url: &str) -> bool {
        if url.is_empty() || self.entries.get(url).is_some() || self.pending.contains(url) {
            return false;
        }
        self.pending.insert(url.to_string());
        true
    }

    /// Stores a finished download.
    pub fn insert(&mut self, url: String, handle: Handle) {
        self.pending.remove(&url);
        self.entries.put(url, handle);
    }

    /// Forgets a failed download so a later request can retry it.
    pub fn fail(&mut self, url: &str) {
        self.pending.remove(url);
    }

    /// Cached image for `url`, without touching recency.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&Handle> {
        self.entries.peek(url)
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn preview_url_only_rewrites_mealdb_images() {
        assert_eq!(
            preview_url("https://www.themealdb.com/images/media/meals/abc.jpg"),
            "https://www.themealdb.com/images/media/meals/abc.jpg/preview"
        );
        assert_eq!(preview_url("https://example.com/a.jpg"), "https://example.com/a.jpg");
    }

    #[test]
    fn pending_requests_are_not_duplicated() {
        let mut cache = ThumbnailCache::new(4);
        assert!(cache.request("a"));
        assert!(!cache.request("a"));
        assert!(cache.is_pending("a"));

        cache.insert("a".to_string(), handle());
        assert!(!cache.is_pending("a"));
        assert!(!cache.request("a"));
    }

    #[test]
    fn failed_download_can_be_retried() {
        let mut cache = ThumbnailCache::new(4);
        assert!(cache.request("a"));
        cache.fail("a");
        assert!(cache.request("a"));
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = ThumbnailCache::new(2);
        cache.insert("a".to_string(), handle());
        cache.insert("b".to_string(), handle());
        assert!(!cache.request("a"));

        cache.insert("c".to_string(), handle());

        assert!(cache.peek("a").is_some());
        assert!(cache.peek("b").is_none());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_is_raised() {
        let mut cache = ThumbnailCache::new(0);
        cache.insert("a".to_string(), handle());
        assert_eq!(cache.len(), 1);
        assert!(!cache.request(""));
    }
}
