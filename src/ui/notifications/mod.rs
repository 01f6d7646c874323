// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! - [`notification`] - `Notification` with severity and i18n key
//! - [`manager`] - queue and auto-dismiss lifecycle
//! - [`toast`] - rendering in the bottom-right corner
//!
//! Info toasts last 3s, warnings 5s, errors stay until dismissed. At most
//! three toasts are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
