// SPDX-License-Identifier: MPL-2.0
//! Shared user interface building blocks.
//!
//! - [`design_tokens`] - colors, spacing, sizing and typography constants
//! - [`theming`] - light/dark/system theme mode
//! - [`styles`] - button and container styles
//! - [`notifications`] - toast notifications
//! - [`widgets`] - spinner and scroll lock widgets

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
