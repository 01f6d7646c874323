// SPDX-License-Identifier: MPL-2.0
//! Application root: the portfolio page controller.
//!
//! `App` is built once in the iced boot function, after settings and the
//! catalog are loaded. It owns every piece of page state: filter, reveal
//! schedules, scroll position, the scroll lock and the gallery component.
//! The gallery reports back through [`gallery::Effect`]s so the lock and the
//! warning toasts stay in one place.

mod message;
mod scroll;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use scroll::PageScroll;

use crate::config::{self, Config};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::portfolio::catalog::DEFAULT_CATALOG_FILE;
use crate::portfolio::{Catalog, ProjectFilter, RevealSchedule};
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

pub struct App {
    pub i18n: I18n,
    catalog: Option<Catalog>,
    /// Always `Light` or `Dark`; `System` is resolved at startup.
    theme_mode: ThemeMode,
    filter: ProjectFilter,
    project_reveal: RevealSchedule,
    design_reveal: RevealSchedule,
    /// Skill bars grow from empty with the same staggered timing.
    skill_reveal: RevealSchedule,
    scroll: PageScroll,
    /// Set while the gallery modal is open.
    scroll_locked: bool,
    gallery: gallery::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("has_catalog", &self.catalog.is_some())
            .field("filter", &self.filter)
            .field("scroll_locked", &self.scroll_locked)
            .field("gallery_open", &self.gallery.is_open())
            .finish()
    }
}

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        let i18n = I18n::new(flags.lang.clone(), &config);

        let catalog_path = flags
            .catalog_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE));
        let catalog = match Catalog::load_from_path(&catalog_path) {
            Ok(catalog) => Ok(catalog),
            Err(err) => {
                log::warn!("failed to load catalog {}: {err}", catalog_path.display());
                Err(err)
            }
        };

        let mut app = Self::with_catalog(i18n, &config, catalog.ok(), Instant::now());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }
        if app.catalog.is_none() {
            app.notifications.push(
                notifications::Notification::warning("notification-catalog-load-error")
                    .with_arg("path", catalog_path.display().to_string()),
            );
        }

        (app, Task::none())
    }

    /// Builds the page for an already loaded catalog; reveals start at `now`.
    pub fn with_catalog(
        i18n: I18n,
        config: &Config,
        catalog: Option<Catalog>,
        now: Instant,
    ) -> Self {
        let (projects, designs, skills) = catalog.as_ref().map_or((0, 0, 0), |c| {
            (c.projects.len(), c.designs.len(), c.skills.len())
        });

        Self {
            i18n,
            catalog,
            theme_mode: config.general.theme_mode.resolve(),
            filter: ProjectFilter::All,
            project_reveal: RevealSchedule::new(projects, now),
            design_reveal: RevealSchedule::new(designs, now),
            skill_reveal: RevealSchedule::new(skills, now),
            scroll: PageScroll::default(),
            scroll_locked: false,
            gallery: gallery::State::new(&config.gallery),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.catalog.as_ref().map(|c| c.owner.as_str()) {
            Some(owner) if !owner.is_empty() => format!("{owner} - {app_name}"),
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn project_reveal(&self) -> &RevealSchedule {
        &self.project_reveal
    }

    #[must_use]
    pub fn skill_reveal(&self) -> &RevealSchedule {
        &self.skill_reveal
    }

    #[must_use]
    pub fn page_scroll(&self) -> PageScroll {
        self.scroll
    }
}
