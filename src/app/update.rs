// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, PageScroll};
use crate::gallery::{self, Effect};
use crate::portfolio::ProjectFilter;
use crate::ui::notifications::Notification;
use iced::Task;
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(msg) => handle_gallery_message(app, msg),
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::OpenDesign(index) => handle_open_design(app, index),
        Message::FilterSelected(filter) => {
            handle_filter_selected(app, filter, Instant::now());
            Task::none()
        }
        Message::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            Task::none()
        }
        Message::PageScrolled { offset_y, fraction } => {
            app.scroll = PageScroll::new(offset_y, fraction);
            Task::none()
        }
        Message::Tick(now) => {
            handle_tick(app, now);
            Task::none()
        }
    }
}

fn handle_gallery_message(app: &mut App, message: gallery::Message) -> Task<Message> {
    let (effect, task) = app.gallery.handle_message(message);

    match effect {
        Effect::None => {}
        Effect::Opened => app.scroll_locked = true,
        Effect::Closed => app.scroll_locked = false,
        Effect::ConfigurationFailed(err) => {
            app.notifications.push(Notification::warning(err.i18n_key()));
        }
    }

    task.map(Message::Gallery)
}

fn handle_open_design(app: &mut App, index: usize) -> Task<Message> {
    let trigger = app
        .catalog
        .as_ref()
        .and_then(|catalog| catalog.design_trigger(index));

    match trigger {
        Some(trigger) => handle_gallery_message(app, gallery::Message::Open(trigger)),
        None => {
            log::warn!("no design card at index {index}");
            Task::none()
        }
    }
}

/// Applies a new project filter and replays the entrance of the visible cards.
fn handle_filter_selected(app: &mut App, filter: ProjectFilter, now: Instant) {
    if app.filter == filter {
        return;
    }

    let visible = app
        .catalog
        .as_ref()
        .map_or(0, |catalog| filter.visible_indices(&catalog.projects).len());

    app.filter = filter;
    app.project_reveal.restart(visible, now);
}

fn handle_tick(app: &mut App, now: Instant) {
    app.project_reveal.advance(now);
    app.design_reveal.advance(now);
    app.skill_reveal.advance(now);
    app.notifications.tick(now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::portfolio::Catalog;
    use crate::ui::theming::ThemeMode;
    use iced::keyboard::{self, key::Named, Key, Location, Modifiers};
    use std::time::Duration;

    const CATALOG: &str = r#"
owner = "Dana Reyes"

[[projects]]
title = "Gear Train"
categories = ["cad"]

[[projects]]
title = "Portfolio Site"
categories = ["web"]

[[projects]]
title = "Fixture Plate"
categories = ["cad", "manufacturing"]

[[designs]]
heading = "Bracket Assembly"
images = '["a.png", "b.png", "c.png"]'

[[designs]]
heading = "Broken Card"

[[skills]]
name = "SolidWorks"
level = 90

[[skills]]
name = "GD&T"
level = 70
"#;

    fn app_at(now: Instant) -> App {
        let catalog = Catalog::parse(CATALOG, "/portfolio").expect("catalog parses");
        App::with_catalog(I18n::default(), &Config::default(), Some(catalog), now)
    }

    fn escape() -> Message {
        Message::Gallery(gallery::Message::RawEvent(iced::Event::Keyboard(
            keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                modified_key: Key::Named(Named::Escape),
                physical_key: keyboard::key::Physical::Code(keyboard::key::Code::Escape),
                location: Location::Standard,
                modifiers: Modifiers::default(),
                text: None,
                repeat: false,
            },
        )))
    }

    #[test]
    fn opening_a_design_locks_page_scroll() {
        let mut app = app_at(Instant::now());

        let _ = app.update(Message::OpenDesign(0));

        assert!(app.gallery().is_open());
        assert!(app.is_scroll_locked());
        assert_eq!(app.gallery().gallery().title(), "Bracket Assembly");
    }

    #[test]
    fn closing_the_gallery_releases_the_lock() {
        let mut app = app_at(Instant::now());
        let _ = app.update(Message::OpenDesign(0));

        let _ = app.update(Message::Gallery(gallery::Message::Close));
        assert!(!app.gallery().is_open());
        assert!(!app.is_scroll_locked());

        let _ = app.update(Message::Gallery(gallery::Message::Close));
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn escape_closes_and_unlocks() {
        let mut app = app_at(Instant::now());
        let _ = app.update(Message::OpenDesign(0));

        let _ = app.update(escape());

        assert!(!app.gallery().is_open());
        assert!(!app.is_scroll_locked());
    }

    #[test]
    fn design_without_images_shows_warning_toast() {
        let mut app = app_at(Instant::now());

        let _ = app.update(Message::OpenDesign(1));

        assert!(!app.gallery().is_open());
        assert!(!app.is_scroll_locked());
        let toast = app.notifications().visible().next().expect("toast shown");
        assert_eq!(toast.message_key(), "error-gallery-missing-images");
    }

    #[test]
    fn unknown_design_index_is_ignored() {
        let mut app = app_at(Instant::now());

        let _ = app.update(Message::OpenDesign(42));

        assert!(!app.gallery().is_open());
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn filter_change_restarts_reveal() {
        let start = Instant::now();
        let mut app = app_at(start);
        let _ = app.update(Message::Tick(start + Duration::from_secs(5)));
        assert!(app.project_reveal().is_settled());

        handle_filter_selected(
            &mut app,
            ProjectFilter::Category("cad".into()),
            start + Duration::from_secs(6),
        );

        assert_eq!(app.filter(), &ProjectFilter::Category("cad".into()));
        assert!(!app.project_reveal().is_settled());
    }

    #[test]
    fn reselecting_the_same_filter_keeps_cards_visible() {
        let start = Instant::now();
        let mut app = app_at(start);
        let _ = app.update(Message::Tick(start + Duration::from_secs(5)));

        handle_filter_selected(&mut app, ProjectFilter::All, start + Duration::from_secs(6));

        assert!(app.project_reveal().is_settled());
    }

    #[test]
    fn theme_toggle_flips_between_light_and_dark() {
        let mut app = app_at(Instant::now());
        let initial = app.theme_mode();
        assert_ne!(initial, ThemeMode::System);

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode(), initial.toggled());

        let _ = app.update(Message::ToggleTheme);
        assert_eq!(app.theme_mode(), initial);
    }

    #[test]
    fn scrolling_updates_header_elevation() {
        let mut app = app_at(Instant::now());

        let _ = app.update(Message::PageScrolled {
            offset_y: 120.0,
            fraction: 0.4,
        });

        assert!(app.page_scroll().header_elevated());
        assert_eq!(app.page_scroll().fraction(), 0.4);
    }

    #[test]
    fn ticks_grow_skill_bars_to_their_level() {
        let start = Instant::now();
        let mut app = app_at(start);
        let skill = app.catalog.as_ref().expect("catalog").skills[1].clone();

        assert_eq!(skill.animated_fraction(app.skill_reveal().state(1)), 0.0);

        let _ = app.update(Message::Tick(start + Duration::from_millis(400)));
        let midway = skill.animated_fraction(app.skill_reveal().state(1));
        assert!(midway > 0.0 && midway < skill.fraction());

        let _ = app.update(Message::Tick(start + Duration::from_secs(5)));
        assert!(app.skill_reveal().is_settled());
        assert!((skill.animated_fraction(app.skill_reveal().state(1)) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn missing_catalog_renders_empty_page() {
        let app = App::with_catalog(I18n::default(), &Config::default(), None, Instant::now());
        assert!(app.project_reveal().is_settled());
        assert!(!app.is_scroll_locked());
    }
}
