// SPDX-License-Identifier: MPL-2.0
//! Gallery component: owns the session state and drives image loads.
//!
//! The parent forwards [`Message`]s and reacts to the returned [`Effect`]
//! (scroll lock, warning toasts). Loads are plain tasks; completions carry a
//! [`LoadTicket`] and are dropped by [`SlideLoad`] when superseded.

use super::cache::ImageCache;
use super::loader::{self, ImageData};
use super::loading::{Completion, ImageSlot, SlideLoad};
use super::presentation::{thumbnail_scroll_offset, GalleryInfo};
use super::state::{GalleryState, LoadTicket};
use super::trigger::{ImageRef, Trigger};
use crate::config::GalleryConfig;
use crate::error::{ConfigurationError, ResourceLoadError};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, time, Subscription, Task};
use std::time::{Duration, Instant};

/// Identifier of the thumbnail strip scrollable.
pub const THUMBNAIL_STRIP_ID: &str = "gallery-thumbnail-strip";

/// Spinner and timeout tick rate while an image is pending (about 60 FPS).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone)]
pub enum Message {
    Open(Trigger),
    NavigatePrevious,
    NavigateNext,
    JumpTo(usize),
    /// Close button, scrim click or Escape.
    Close,
    ImageLoaded {
        ticket: LoadTicket,
        source: ImageRef,
        result: Result<ImageData, ResourceLoadError>,
    },
    ThumbnailLoaded {
        session: u64,
        index: usize,
        source: ImageRef,
        result: Result<ImageData, ResourceLoadError>,
    },
    RawEvent(event::Event),
    Tick(Instant),
}

/// Side effects the page controller performs after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The modal is now visible; lock page scrolling.
    Opened,
    /// The modal is gone; release the scroll lock.
    Closed,
    /// The trigger was rejected and nothing opened.
    ConfigurationFailed(ConfigurationError),
}

/// Settings captured from `[gallery]` at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fallback_title: String,
    pub loading_timeout: Duration,
    pub thumbnail_size: f32,
}

impl From<&GalleryConfig> for Settings {
    fn from(config: &GalleryConfig) -> Self {
        Self {
            fallback_title: config.fallback_title().to_string(),
            loading_timeout: config.loading_timeout(),
            thumbnail_size: config.thumbnail_size(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&GalleryConfig::default())
    }
}

#[derive(Debug, Default)]
pub struct State {
    gallery: GalleryState,
    slide: SlideLoad,
    thumbnails: Vec<ImageSlot>,
    /// When the current session's thumbnail loads were started.
    thumbnails_started_at: Option<Instant>,
    /// Bumped on every successful open; tags thumbnail loads.
    session: u64,
    cache: ImageCache,
    settings: Settings,
}

impl State {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            cache: ImageCache::from_config(config),
            settings: Settings::from(config),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.gallery.is_open()
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn info(&self) -> Option<GalleryInfo> {
        GalleryInfo::from_state(&self.gallery)
    }

    #[must_use]
    pub fn slot(&self) -> &ImageSlot {
        self.slide.slot()
    }

    #[must_use]
    pub fn thumbnails(&self) -> &[ImageSlot] {
        &self.thumbnails
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.slide.spinner_rotation()
    }

    /// Returns `true` while the main image or any thumbnail is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.slide.is_loading()
            || self
                .thumbnails
                .iter()
                .any(|slot| matches!(slot, ImageSlot::Loading))
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn cache(&self) -> &ImageCache {
        &self.cache
    }

    /// Keyboard routing while open, plus ticks while anything is loading.
    pub fn subscription(&self) -> Subscription<Message> {
        if !self.is_open() {
            return Subscription::none();
        }

        let keys = event::listen_with(|event, _status, _window| {
            matches!(
                event,
                event::Event::Keyboard(keyboard::Event::KeyPressed { .. })
            )
            .then_some(Message::RawEvent(event))
        });

        let ticks = if self.is_loading() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keys, ticks])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Open(trigger) => self.open(&trigger),
            Message::NavigatePrevious => (Effect::None, self.navigate(-1)),
            Message::NavigateNext => (Effect::None, self.navigate(1)),
            Message::JumpTo(index) => {
                let task = if self.gallery.jump_to(index) {
                    self.show_current()
                } else {
                    Task::none()
                };
                (Effect::None, task)
            }
            Message::Close => self.close(),
            Message::ImageLoaded {
                ticket,
                source,
                result,
            } => {
                self.on_image_loaded(ticket, source, result);
                (Effect::None, Task::none())
            }
            Message::ThumbnailLoaded {
                session,
                index,
                source,
                result,
            } => {
                if let Ok(image) = &result {
                    self.cache.insert(source, image.clone());
                }
                if session == self.session && self.is_open() {
                    if let Some(slot) = self.thumbnails.get_mut(index) {
                        *slot = match result {
                            Ok(image) => ImageSlot::Ready(image),
                            Err(err) => ImageSlot::Failed(err),
                        };
                    }
                }
                (Effect::None, Task::none())
            }
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::Tick(now) => {
                if self.is_loading() {
                    self.slide.tick_spinner();
                }
                if self.slide.check_timeout(now, self.settings.loading_timeout) {
                    log::warn!(
                        "gallery image {} timed out after {:?}",
                        self.current_name(),
                        self.settings.loading_timeout
                    );
                }
                self.expire_thumbnails(now);
                (Effect::None, Task::none())
            }
        }
    }

    fn open(&mut self, trigger: &Trigger) -> (Effect, Task<Message>) {
        if let Err(err) = self.gallery.open(trigger, &self.settings.fallback_title) {
            log::warn!("gallery not opened: {err}");
            return (Effect::ConfigurationFailed(err), Task::none());
        }

        self.session += 1;
        log::debug!(
            "gallery opened: \"{}\" with {} image(s)",
            self.gallery.title(),
            self.gallery.len()
        );

        let thumbnails = self.load_thumbnails();
        let current = self.show_current();
        (Effect::Opened, Task::batch([current, thumbnails]))
    }

    fn close(&mut self) -> (Effect, Task<Message>) {
        if !self.gallery.close() {
            return (Effect::None, Task::none());
        }
        self.slide.reset();
        self.thumbnails.clear();
        self.thumbnails_started_at = None;
        log::debug!("gallery closed ({:?})", self.cache.stats());
        (Effect::Closed, Task::none())
    }

    fn navigate(&mut self, delta: isize) -> Task<Message> {
        if self.gallery.navigate(delta) {
            self.show_current()
        } else {
            Task::none()
        }
    }

    /// Shows the current image from cache or starts loading it, and scrolls
    /// the active thumbnail into view.
    fn show_current(&mut self) -> Task<Message> {
        let Some(source) = self.gallery.current_image().cloned() else {
            return Task::none();
        };
        let ticket = self.gallery.ticket();
        let scroll = operation::snap_to(
            Id::new(THUMBNAIL_STRIP_ID),
            RelativeOffset {
                x: thumbnail_scroll_offset(ticket.index, self.gallery.len()),
                y: 0.0,
            },
        );

        if let Some(image) = self.cache.get(&source) {
            self.slide.show_cached(ticket, image);
            return scroll;
        }

        self.slide.start(ticket, Instant::now());
        let key = source.clone();
        let load = Task::perform(loader::load_image(source), move |result| {
            Message::ImageLoaded {
                ticket,
                source: key,
                result,
            }
        });
        Task::batch([load, scroll])
    }

    fn load_thumbnails(&mut self) -> Task<Message> {
        let session = self.session;
        let images = self.gallery.images().to_vec();
        self.thumbnails = Vec::with_capacity(images.len());

        let mut tasks = Vec::new();
        for (index, source) in images.into_iter().enumerate() {
            if let Some(image) = self.cache.get(&source) {
                self.thumbnails.push(ImageSlot::Ready(image));
                continue;
            }
            self.thumbnails.push(ImageSlot::Loading);
            let key = source.clone();
            tasks.push(Task::perform(loader::load_image(source), move |result| {
                Message::ThumbnailLoaded {
                    session,
                    index,
                    source: key,
                    result,
                }
            }));
        }
        self.thumbnails_started_at = (!tasks.is_empty()).then(Instant::now);
        Task::batch(tasks)
    }

    /// Marks thumbnails still pending after the loading timeout as failed.
    fn expire_thumbnails(&mut self, now: Instant) {
        let Some(started_at) = self.thumbnails_started_at else {
            return;
        };
        if now.saturating_duration_since(started_at) < self.settings.loading_timeout {
            return;
        }

        let mut expired = 0;
        for slot in &mut self.thumbnails {
            if matches!(slot, ImageSlot::Loading) {
                *slot = ImageSlot::Failed(ResourceLoadError::TimedOut);
                expired += 1;
            }
        }
        if expired > 0 {
            log::warn!("{expired} gallery thumbnail(s) timed out");
        }
        self.thumbnails_started_at = None;
    }

    fn on_image_loaded(
        &mut self,
        ticket: LoadTicket,
        source: ImageRef,
        result: Result<ImageData, ResourceLoadError>,
    ) {
        if let Ok(image) = &result {
            self.cache.insert(source.clone(), image.clone());
            if self.is_open() {
                // The main image doubles as its thumbnail when that is still pending.
                for (slot, image_ref) in self.thumbnails.iter_mut().zip(self.gallery.images()) {
                    if *image_ref == source && matches!(slot, ImageSlot::Loading) {
                        *slot = ImageSlot::Ready(image.clone());
                    }
                }
            }
        }

        let failure = result.as_ref().err().cloned();
        if !self.gallery.accepts(ticket) {
            log::debug!("dropping stale load for {}", source.display_name());
            return;
        }
        if self.slide.complete(ticket, result) == Completion::Stale {
            log::debug!("dropping stale load for {}", source.display_name());
        } else if let Some(err) = failure {
            log::warn!("gallery image {} failed: {err}", source.display_name());
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> (Effect, Task<Message>) {
        if !self.is_open() {
            return (Effect::None, Task::none());
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => match named {
                keyboard::key::Named::Escape => self.close(),
                keyboard::key::Named::ArrowLeft => (Effect::None, self.navigate(-1)),
                keyboard::key::Named::ArrowRight => (Effect::None, self.navigate(1)),
                _ => (Effect::None, Task::none()),
            },
            _ => (Effect::None, Task::none()),
        }
    }

    fn current_name(&self) -> String {
        self.gallery
            .current_image()
            .map(ImageRef::display_name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn trigger(images: Option<&str>, heading: Option<&str>) -> Trigger {
        Trigger {
            images: images.map(str::to_string),
            heading: heading.map(str::to_string),
            base_dir: PathBuf::from("/portfolio"),
        }
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![10, 20, 30, 255])
    }

    fn key(name: &str) -> event::Event {
        let (named, code) = match name {
            "Escape" => (keyboard::key::Named::Escape, keyboard::key::Code::Escape),
            "ArrowLeft" => (keyboard::key::Named::ArrowLeft, keyboard::key::Code::ArrowLeft),
            _ => (keyboard::key::Named::ArrowRight, keyboard::key::Code::ArrowRight),
        };
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    fn opened() -> State {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::Open(trigger(
            Some(r#"["a.png","b.png","c.png"]"#),
            Some("Bracket Assembly"),
        )));
        assert_eq!(effect, Effect::Opened);
        state
    }

    #[test]
    fn open_starts_loading_first_image() {
        let state = opened();
        assert!(state.is_open());
        assert_eq!(state.gallery().title(), "Bracket Assembly");
        assert!(matches!(state.slot(), ImageSlot::Loading));
        assert_eq!(state.thumbnails().len(), 3);
    }

    #[test]
    fn rejected_trigger_reports_configuration_error() {
        let mut state = State::default();
        let (effect, _) = state.handle_message(Message::Open(trigger(None, Some("Bracket"))));
        assert_eq!(
            effect,
            Effect::ConfigurationFailed(ConfigurationError::MissingImageList)
        );
        assert!(!state.is_open());
    }

    #[test]
    fn keys_route_to_navigation_and_close() {
        let mut state = opened();
        state.handle_message(Message::RawEvent(key("ArrowRight")));
        assert_eq!(state.gallery().current_index(), 1);
        state.handle_message(Message::RawEvent(key("ArrowLeft")));
        assert_eq!(state.gallery().current_index(), 0);

        let (effect, _) = state.handle_message(Message::RawEvent(key("Escape")));
        assert_eq!(effect, Effect::Closed);
        assert!(!state.is_open());

        let (effect, _) = state.handle_message(Message::RawEvent(key("ArrowRight")));
        assert_eq!(effect, Effect::None);
        assert_eq!(state.gallery().current_index(), 0);
    }

    #[test]
    fn second_close_has_no_effect() {
        let mut state = opened();
        assert_eq!(state.handle_message(Message::Close).0, Effect::Closed);
        assert_eq!(state.handle_message(Message::Close).0, Effect::None);
    }

    #[test]
    fn stale_completion_is_cached_but_not_shown() {
        let mut state = opened();
        let first = state.gallery().ticket();
        state.handle_message(Message::NavigateNext);

        state.handle_message(Message::ImageLoaded {
            ticket: first,
            source: ImageRef::Local(PathBuf::from("/portfolio/a.png")),
            result: Ok(pixel()),
        });

        assert!(matches!(state.slot(), ImageSlot::Loading));
        assert!(state
            .cache()
            .contains(&ImageRef::Local(PathBuf::from("/portfolio/a.png"))));

        // Going back is served from the cache without a new load.
        state.handle_message(Message::NavigatePrevious);
        assert!(matches!(state.slot(), ImageSlot::Ready(_)));
    }

    #[test]
    fn failed_image_keeps_navigation_usable() {
        let mut state = opened();
        let ticket = state.gallery().ticket();
        state.handle_message(Message::ImageLoaded {
            ticket,
            source: ImageRef::Local(PathBuf::from("/portfolio/a.png")),
            result: Err(ResourceLoadError::Io("missing".into())),
        });
        assert!(matches!(state.slot(), ImageSlot::Failed(_)));

        state.handle_message(Message::NavigateNext);
        assert_eq!(state.gallery().current_index(), 1);
        assert!(matches!(state.slot(), ImageSlot::Loading));
    }

    #[test]
    fn tick_times_out_pending_image() {
        let mut state = opened();
        let later = Instant::now() + state.settings().loading_timeout + Duration::from_secs(1);
        state.handle_message(Message::Tick(later));
        assert!(matches!(
            state.slot(),
            ImageSlot::Failed(ResourceLoadError::TimedOut)
        ));
    }

    #[test]
    fn tick_times_out_pending_thumbnails() {
        let mut state = State::default();
        state.handle_message(Message::Open(trigger(
            Some(r#"["https://10.255.255.1/a.png", "b.png"]"#),
            None,
        )));
        assert!(state.is_loading());

        let later = Instant::now() + state.settings().loading_timeout + Duration::from_secs(60);
        state.handle_message(Message::Tick(later));

        assert!(state
            .thumbnails()
            .iter()
            .all(|slot| matches!(slot, ImageSlot::Failed(ResourceLoadError::TimedOut))));
        assert!(!state.is_loading());
    }

    #[test]
    fn thumbnails_wait_until_the_timeout() {
        let mut state = opened();
        let early = Instant::now() + state.settings().loading_timeout / 2;
        state.handle_message(Message::Tick(early));

        assert!(state
            .thumbnails()
            .iter()
            .all(|slot| matches!(slot, ImageSlot::Loading)));
    }

    #[test]
    fn thumbnails_from_previous_session_are_ignored() {
        let mut state = opened();
        state.handle_message(Message::Close);
        state.handle_message(Message::Open(trigger(Some(r#"["x.png"]"#), None)));

        state.handle_message(Message::ThumbnailLoaded {
            session: 1,
            index: 0,
            source: ImageRef::Local(PathBuf::from("/portfolio/a.png")),
            result: Ok(pixel()),
        });
        assert!(matches!(state.thumbnails()[0], ImageSlot::Loading));
        assert_eq!(state.gallery().title(), "CAD Views");
    }
}
