// SPDX-License-Identifier: MPL-2.0
//! Page scroll position as seen by the header and the progress bar.

use crate::config::HEADER_ELEVATION_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageScroll {
    offset_y: f32,
    fraction: f32,
}

impl PageScroll {
    /// Builds the state from the scrollable's absolute and relative offsets.
    ///
    /// Non-finite values (content shorter than the viewport) count as the top.
    #[must_use]
    pub fn new(offset_y: f32, fraction: f32) -> Self {
        let finite = |value: f32| if value.is_finite() { value } else { 0.0 };
        Self {
            offset_y: finite(offset_y).max(0.0),
            fraction: finite(fraction).clamp(0.0, 1.0),
        }
    }

    /// Share of the page scrolled past, in `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// The header is drawn elevated once the page leaves the top.
    #[must_use]
    pub fn header_elevated(&self) -> bool {
        self.offset_y > HEADER_ELEVATION_THRESHOLD
    }

    /// Progress split as fill portions for a two-part bar.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn progress_portions(&self) -> (u16, u16) {
        let filled = (self.fraction * 1000.0).round() as u16;
        (filled, 1000 - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_elevates_past_threshold() {
        assert!(!PageScroll::new(HEADER_ELEVATION_THRESHOLD, 0.1).header_elevated());
        assert!(PageScroll::new(HEADER_ELEVATION_THRESHOLD + 1.0, 0.1).header_elevated());
    }

    #[test]
    fn invalid_offsets_are_sanitized() {
        let scroll = PageScroll::new(f32::NAN, f32::INFINITY);
        assert_eq!(scroll.fraction(), 0.0);
        assert!(!scroll.header_elevated());
        assert_eq!(PageScroll::new(10.0, 3.0).fraction(), 1.0);
    }

    #[test]
    fn portions_cover_the_bar() {
        assert_eq!(PageScroll::new(0.0, 0.0).progress_portions(), (0, 1000));
        assert_eq!(PageScroll::new(400.0, 0.25).progress_portions(), (250, 750));
        assert_eq!(PageScroll::new(900.0, 1.0).progress_portions(), (1000, 0));
    }
}
