// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery;
use crate::portfolio::ProjectFilter;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// A design card's gallery button was pressed.
    OpenDesign(usize),
    FilterSelected(ProjectFilter),
    ToggleTheme,
    PageScrolled { offset_y: f32, fraction: f32 },
    /// Drives card reveals and notification expiry.
    Tick(Instant),
}

/// Runtime flags passed from `main` to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional settings directory override (`--config-dir`).
    pub config_dir: Option<PathBuf>,
    /// Catalog file; `portfolio.toml` in the working directory when absent.
    pub catalog_path: Option<PathBuf>,
}
