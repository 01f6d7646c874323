// SPDX-License-Identifier: MPL-2.0
//! Modal image gallery for design cards.
//!
//! - [`trigger`] - image-list attribute parsing and image references
//! - [`state`] - the session state machine (open, navigate, jump, close)
//! - [`loader`] - async fetch and decode
//! - [`cache`] - bounded cache of decoded images
//! - [`loading`] - load state of the displayed image
//! - [`presentation`] - view snapshot and thumbnail scrolling
//! - [`component`] - messages, effects and task orchestration
//! - [`view`] - modal rendering

pub mod cache;
pub mod component;
pub mod loader;
pub mod loading;
pub mod presentation;
pub mod state;
pub mod trigger;
pub mod view;

pub use component::{Effect, Message, State};
pub use loader::ImageData;
pub use loading::ImageSlot;
pub use presentation::GalleryInfo;
pub use state::{GalleryState, LoadTicket};
pub use trigger::{ImageRef, Trigger};
