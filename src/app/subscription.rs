// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Ticks only run while something animates: card reveals, pending toasts or
//! the gallery's own loading indicator.

use super::{App, Message};
use iced::{time, Subscription};
use std::time::Duration;

/// Frame rate of the card entrance animation.
const REVEAL_TICK: Duration = Duration::from_millis(16);

/// Notification expiry only needs coarse resolution.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

pub fn subscription(app: &App) -> Subscription<Message> {
    let gallery = app.gallery.subscription().map(Message::Gallery);

    let reveal = if app.project_reveal.is_settled()
        && app.design_reveal.is_settled()
        && app.skill_reveal.is_settled()
    {
        Subscription::none()
    } else {
        time::every(REVEAL_TICK).map(Message::Tick)
    };

    let notifications = if app.notifications.has_notifications() {
        time::every(NOTIFICATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    };

    Subscription::batch([gallery, reveal, notifications])
}
