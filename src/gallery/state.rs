// SPDX-License-Identifier: MPL-2.0
//! Gallery session state: image list, current index, title, open flag.
//!
//! This is the pure part of the gallery. It performs no I/O and knows nothing
//! about rendering; the component drives loads and the view from it.

use super::trigger::{ImageRef, Trigger};
use crate::error::ConfigurationError;

/// Identifies one image load request.
///
/// The generation increases on every open and every index change, so a
/// completion whose ticket differs from [`GalleryState::ticket`] is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryState {
    images: Vec<ImageRef>,
    current_index: usize,
    title: String,
    is_open: bool,
    generation: u64,
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from a trigger.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the trigger's image list is missing,
    /// malformed or empty. The state is left untouched in that case.
    pub fn open(
        &mut self,
        trigger: &Trigger,
        fallback_title: &str,
    ) -> Result<(), ConfigurationError> {
        let images = trigger.parse_images()?;

        self.images = images;
        self.title = trigger.title(fallback_title);
        self.current_index = 0;
        self.is_open = true;
        self.generation += 1;
        Ok(())
    }

    /// Moves by `delta`, clamped to the list bounds (never wraps).
    ///
    /// Returns `true` if the current index changed.
    pub fn navigate(&mut self, delta: isize) -> bool {
        if !self.is_open || self.images.is_empty() {
            return false;
        }
        let last = self.images.len() - 1;
        let target = self.current_index.saturating_add_signed(delta).min(last);
        self.set_index(target)
    }

    /// Selects `index` directly; out-of-range requests are ignored.
    ///
    /// Returns `true` if the current index changed.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if !self.is_open || index >= self.images.len() {
            return false;
        }
        self.set_index(index)
    }

    /// Ends the session. Returns `true` if the gallery was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.images.clear();
        self.title.clear();
        self.current_index = 0;
        self.generation += 1;
        true
    }

    fn set_index(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        self.generation += 1;
        true
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        if self.is_open {
            self.images.get(self.current_index)
        } else {
            None
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn at_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn at_last(&self) -> bool {
        self.current_index + 1 >= self.images.len()
    }

    /// Ticket for the image currently displayed.
    #[must_use]
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket {
            generation: self.generation,
            index: self.current_index,
        }
    }

    /// Returns `true` if a completion for `ticket` may update the view.
    #[must_use]
    pub fn accepts(&self, ticket: LoadTicket) -> bool {
        self.is_open && ticket == self.ticket()
    }
}
