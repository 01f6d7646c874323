// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: fallback title, loading timeout, thumbnails
//! - **Cache**: decoded image cache bounds
//! - **Reveal**: card entrance animation

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Title used when a design card has no heading.
pub const DEFAULT_GALLERY_TITLE: &str = "CAD Views";

/// Seconds before a pending image load is reported as failed.
pub const DEFAULT_LOADING_TIMEOUT_SECS: u32 = 10;

/// Minimum loading timeout (in seconds).
pub const MIN_LOADING_TIMEOUT_SECS: u32 = 1;

/// Maximum loading timeout (in seconds).
pub const MAX_LOADING_TIMEOUT_SECS: u32 = 120;

/// Default edge length of a thumbnail in the strip (logical pixels).
pub const DEFAULT_THUMBNAIL_SIZE: f32 = 72.0;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: f32 = 32.0;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: f32 = 160.0;

// ==========================================================================
// Cache Defaults
// ==========================================================================

/// Default number of decoded images kept in memory.
pub const DEFAULT_CACHE_MAX_IMAGES: usize = 16;

/// Minimum number of cached images.
pub const MIN_CACHE_MAX_IMAGES: usize = 4;

/// Maximum number of cached images.
pub const MAX_CACHE_MAX_IMAGES: usize = 64;

/// Default decoded image cache size in megabytes.
pub const DEFAULT_CACHE_MAX_MB: u32 = 128;

/// Minimum decoded image cache size in megabytes.
pub const MIN_CACHE_MAX_MB: u32 = 16;

/// Maximum decoded image cache size in megabytes.
pub const MAX_CACHE_MAX_MB: u32 = 1024;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Delay between two consecutive cards starting their entrance (ms).
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Duration of a card's entrance (ms).
pub const REVEAL_ENTER_MS: u64 = 600;

/// Vertical scroll offset after which the header is drawn elevated.
pub const HEADER_ELEVATION_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LOADING_TIMEOUT_SECS > 0);
    assert!(MAX_LOADING_TIMEOUT_SECS >= MIN_LOADING_TIMEOUT_SECS);
    assert!(DEFAULT_LOADING_TIMEOUT_SECS >= MIN_LOADING_TIMEOUT_SECS);
    assert!(DEFAULT_LOADING_TIMEOUT_SECS <= MAX_LOADING_TIMEOUT_SECS);

    assert!(MIN_THUMBNAIL_SIZE > 0.0);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);

    assert!(MIN_CACHE_MAX_IMAGES > 0);
    assert!(DEFAULT_CACHE_MAX_IMAGES >= MIN_CACHE_MAX_IMAGES);
    assert!(DEFAULT_CACHE_MAX_IMAGES <= MAX_CACHE_MAX_IMAGES);

    assert!(MIN_CACHE_MAX_MB > 0);
    assert!(DEFAULT_CACHE_MAX_MB >= MIN_CACHE_MAX_MB);
    assert!(DEFAULT_CACHE_MAX_MB <= MAX_CACHE_MAX_MB);

    assert!(REVEAL_ENTER_MS > 0);
};
