// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.
//!
//! # Categories
//!
//! - **Recipes**: data source and batch sizes
//! - **List**: infinite-scroll behavior
//! - **Thumbnails**: image cache bounds

// ==========================================================================
// Recipe Source Defaults
// ==========================================================================

/// Base URL of TheMealDB's free JSON API.
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Number of parallel `random.php` requests in random-batch mode.
pub const DEFAULT_RANDOM_COUNT: usize = 20;

/// Smallest accepted random batch.
pub const MIN_RANDOM_COUNT: usize = 1;

/// Largest accepted random batch.
pub const MAX_RANDOM_COUNT: usize = 50;

// ==========================================================================
// List Defaults
// ==========================================================================

/// Remaining scroll distance (px) under which the next page is requested.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 200.0;

/// Pages keep loading without scrolling until this many recipes are held.
pub const DEFAULT_PREFILL_MIN_RECIPES: usize = 12;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Number of decoded thumbnails kept in memory.
pub const DEFAULT_THUMBNAIL_CACHE_CAPACITY: usize = 64;

const _: () = {
    assert!(MIN_RANDOM_COUNT > 0);
    assert!(DEFAULT_RANDOM_COUNT >= MIN_RANDOM_COUNT);
    assert!(DEFAULT_RANDOM_COUNT <= MAX_RANDOM_COUNT);
    assert!(DEFAULT_SCROLL_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_THUMBNAIL_CACHE_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_count_defaults_are_valid() {
        assert_eq!(DEFAULT_RANDOM_COUNT, 20);
        assert!(DEFAULT_RANDOM_COUNT >= MIN_RANDOM_COUNT);
        assert!(DEFAULT_RANDOM_COUNT <= MAX_RANDOM_COUNT);
    }

    #[test]
    fn api_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
