// SPDX-License-Identifier: MPL-2.0
//! Load state of the main gallery image.

use super::loader::ImageData;
use super::state::LoadTicket;
use crate::error::ResourceLoadError;
use std::f32::consts::PI;
use std::time::{Duration, Instant};

/// Spinner advance per tick: half a turn per second at 60 ticks per second.
const SPINNER_STEP: f32 = PI / 60.0;

/// What the viewer shows in place of the current image.
#[derive(Debug, Clone, Default)]
pub enum ImageSlot {
    #[default]
    Loading,
    Ready(ImageData),
    Failed(ResourceLoadError),
}

/// Outcome of offering a completion to [`SlideLoad::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct SlideLoad {
    slot: ImageSlot,
    ticket: Option<LoadTicket>,
    started_at: Option<Instant>,
    spinner_rotation: f32,
}

impl SlideLoad {
    /// Marks `ticket` as the pending load, replacing whatever was shown.
    pub fn start(&mut self, ticket: LoadTicket, now: Instant) {
        self.slot = ImageSlot::Loading;
        self.ticket = Some(ticket);
        self.started_at = Some(now);
    }

    /// Shows an already decoded image for `ticket` without a pending load.
    pub fn show_cached(&mut self, ticket: LoadTicket, image: ImageData) {
        self.slot = ImageSlot::Ready(image);
        self.ticket = Some(ticket);
        self.started_at = None;
    }

    /// Applies a finished load if it belongs to the pending ticket.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<ImageData, ResourceLoadError>,
    ) -> Completion {
        if self.ticket != Some(ticket) || !self.is_loading() {
            return Completion::Stale;
        }
        self.started_at = None;
        self.slot = match result {
            Ok(image) => ImageSlot::Ready(image),
            Err(err) => ImageSlot::Failed(err),
        };
        Completion::Applied
    }

    /// Fails the pending load once `timeout` has elapsed.
    ///
    /// Returns `true` if the slot switched to [`ResourceLoadError::TimedOut`].
    pub fn check_timeout(&mut self, now: Instant, timeout: Duration) -> bool {
        match self.started_at {
            Some(started_at) if self.is_loading() && now.duration_since(started_at) > timeout => {
                self.started_at = None;
                self.slot = ImageSlot::Failed(ResourceLoadError::TimedOut);
                true
            }
            _ => false,
        }
    }

    pub fn tick_spinner(&mut self) {
        self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % (2.0 * PI);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.slot, ImageSlot::Loading) && self.ticket.is_some()
    }

    #[must_use]
    pub fn slot(&self) -> &ImageSlot {
        &self.slot
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
