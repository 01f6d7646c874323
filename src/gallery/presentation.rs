// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshot of an open gallery session for the view layer.

use super::state::GalleryState;

/// Navigation details for the open gallery.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryInfo {
    /// Title captured at open time.
    pub title: String,
    /// Current position (0-indexed).
    pub current_index: usize,
    /// Number of images in the session.
    pub total_count: usize,
    /// Previous control is disabled.
    pub at_first: bool,
    /// Next control is disabled.
    pub at_last: bool,
}

impl GalleryInfo {
    /// Returns `None` while the gallery is closed or has no images.
    #[must_use]
    pub fn from_state(state: &GalleryState) -> Option<Self> {
        if !state.is_open() || state.is_empty() {
            return None;
        }
        Some(Self {
            title: state.title().to_string(),
            current_index: state.current_index(),
            total_count: state.len(),
            at_first: state.at_first(),
            at_last: state.at_last(),
        })
    }

    /// 1-based position for the `current / total` counter.
    #[must_use]
    pub fn position(&self) -> usize {
        self.current_index + 1
    }

    #[must_use]
    pub fn is_active_thumbnail(&self, index: usize) -> bool {
        index == self.current_index
    }
}

/// Horizontal relative offset that brings thumbnail `index` into view.
///
/// The strip scrolls proportionally, so the first thumbnail maps to the start
/// and the last one to the end.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn thumbnail_scroll_offset(index: usize, len: usize) -> f32 {
    if len <= 1 {
        return 0.0;
    }
    (index.min(len - 1) as f32 / (len - 1) as f32).clamp(0.0, 1.0)
}
