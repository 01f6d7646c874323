// SPDX-License-Identifier: MPL-2.0
//! Gallery modal rendering.
//!
//! Layout: title bar (title, counter, close), the current image between the
//! previous/next controls, and the thumbnail strip. The modal sits on a
//! scrim; pressing the scrim closes it, pressing the panel does not.

use super::component::{Message, State, THUMBNAIL_STRIP_ID};
use super::loading::ImageSlot;
use super::presentation::GalleryInfo;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, center, image, mouse_area, opaque, Column, Container, Id, Row, Scrollable, Text,
};
use iced::{ContentFit, Element, Length};

/// Returns the modal layer, or `None` while the gallery is closed.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let info = state.info()?;

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(title_bar(&info, i18n))
        .push(stage(state, &info, i18n))
        .push(thumbnail_strip(state, &info, i18n));

    let panel = Container::new(panel)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .max_width(sizing::MODAL_MAX_WIDTH)
        .style(styles::container::modal);

    let scrim = center(opaque(panel))
        .padding(spacing::XXL)
        .style(styles::container::scrim);

    Some(opaque(mouse_area(scrim).on_press(Message::Close)))
}

fn title_bar<'a>(info: &GalleryInfo, i18n: &'a I18n) -> Element<'a, Message> {
    let position = info.position().to_string();
    let total = info.total_count.to_string();
    let counter = i18n.tr_with_args(
        "gallery-counter",
        &[("current", position.as_str()), ("total", total.as_str())],
    );

    let close = button(Text::new("×").size(typography::TITLE_MD).center())
        .width(Length::Fixed(sizing::BUTTON_HEIGHT))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .on_press(Message::Close)
        .style(styles::button::overlay);

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(info.title.clone())
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(
            Container::new(Text::new(counter).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::overlay::indicator(radius::FULL)),
        )
        .push(close)
        .into()
}

fn stage<'a>(state: &'a State, info: &GalleryInfo, i18n: &'a I18n) -> Element<'a, Message> {
    let nav_button = |label: &'static str, message: Option<Message>| {
        button(Text::new(label).size(typography::TITLE_LG).center())
            .width(Length::Fixed(sizing::NAV_BUTTON))
            .height(Length::Fixed(sizing::NAV_BUTTON))
            .on_press_maybe(message)
            .style(styles::button::overlay)
    };

    let previous = nav_button("‹", (!info.at_first).then_some(Message::NavigatePrevious));
    let next = nav_button("›", (!info.at_last).then_some(Message::NavigateNext));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(previous)
        .push(current_image(state, i18n))
        .push(next)
        .into()
}

fn current_image<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match state.slot() {
        ImageSlot::Loading => {
            AnimatedSpinner::new(palette::WHITE, state.spinner_rotation()).into_element()
        }
        ImageSlot::Ready(data) => image(data.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ImageSlot::Failed(err) => {
            let name = state
                .gallery()
                .current_image()
                .map(|source| source.display_name())
                .unwrap_or_default();

            Container::new(
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(Horizontal::Center)
                    .push(Text::new(i18n.tr("gallery-image-failed")).size(typography::TITLE_SM))
                    .push(Text::new(i18n.tr(err.i18n_key())).size(typography::BODY))
                    .push(Text::new(name).size(typography::CAPTION)),
            )
            .padding(spacing::LG)
            .style(styles::overlay::failure(radius::MD))
            .into()
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn thumbnail_strip<'a>(
    state: &'a State,
    info: &GalleryInfo,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let size = state.settings().thumbnail_size;

    let thumbnails = state
        .thumbnails()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let content: Element<'a, Message> = match slot {
                ImageSlot::Ready(data) => image(data.handle.clone())
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .into(),
                ImageSlot::Loading => center(
                    AnimatedSpinner::new(palette::GRAY_200, state.spinner_rotation())
                        .with_size(size / 2.0)
                        .into_element(),
                )
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .into(),
                ImageSlot::Failed(_) => center(Text::new("!").size(typography::TITLE_MD))
                    .width(Length::Fixed(size))
                    .height(Length::Fixed(size))
                    .into(),
            };

            button(content)
                .padding(0)
                .on_press(Message::JumpTo(index))
                .style(styles::button::thumbnail(info.is_active_thumbnail(index)))
                .into()
        });

    let row = Row::with_children(thumbnails).spacing(spacing::XS);

    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("gallery-thumbnails")).size(typography::CAPTION))
        .push(
            Scrollable::new(row)
                .id(Id::new(THUMBNAIL_STRIP_ID))
                .width(Length::Fill)
                .direction(Direction::Horizontal(Scrollbar::new().spacing(spacing::XXS))),
        )
        .into()
}
