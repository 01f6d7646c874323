// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the scrolling page, the gallery modal, toasts.

use super::{App, Message};
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::portfolio::reveal::REVEAL_SLIDE_DISTANCE;
use crate::portfolio::{
    Catalog, DesignCard, Project, ProjectFilter, Reveal, RevealSchedule, Skill,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::widgets::scroll_lock;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Scrollable, Space, Stack, Text};
use iced::{Element, Length, Padding, Theme};

pub fn view(app: &App) -> Element<'_, Message> {
    let page = Column::new()
        .push(header(app))
        .push(progress_bar(app))
        .push(page_body(app));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(modal) = gallery::view::view(&app.gallery, &app.i18n) {
        layers = layers.push(modal.map(Message::Gallery));
    }

    layers
        .push(Toast::view_overlay(&app.notifications, &app.i18n).map(Message::Notification))
        .into()
}

fn header(app: &App) -> Element<'_, Message> {
    let (owner, tagline) = app.catalog.as_ref().map_or(("", None), |catalog| {
        (catalog.owner.as_str(), catalog.tagline.as_deref())
    });

    let mut identity = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(owner).size(typography::DISPLAY));
    if let Some(tagline) = tagline {
        identity = identity.push(Text::new(tagline).size(typography::BODY));
    }

    let toggle = button(Text::new(app.i18n.tr(app.theme_mode.toggle_label_key())))
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::ToggleTheme)
        .style(styles::button::unselected);

    let row = Row::new()
        .align_y(Vertical::Center)
        .spacing(spacing::MD)
        .push(identity)
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::MD, spacing::XL])
        .style(styles::container::header(app.scroll.header_elevated()))
        .into()
}

fn progress_bar(app: &App) -> Element<'_, Message> {
    let (filled, rest) = app.scroll.progress_portions();

    Row::new()
        .height(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .push(
            Container::new(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::progress_fill),
        )
        .push(Space::new().width(Length::FillPortion(rest)))
        .into()
}

fn page_body(app: &App) -> Element<'_, Message> {
    let content: Element<'_, Message> = match app.catalog.as_ref() {
        Some(catalog) if !catalog.is_empty() => Column::new()
            .spacing(spacing::XXL)
            .push(projects_section(catalog, &app.filter, &app.project_reveal, &app.i18n))
            .push(designs_section(catalog, &app.design_reveal, &app.i18n))
            .push(skills_section(catalog, &app.skill_reveal, &app.i18n))
            .into(),
        _ => Container::new(Text::new(app.i18n.tr("catalog-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .into(),
    };

    let centered = Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .padding(spacing::XL),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let scrollable = Scrollable::new(centered)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::PageScrolled {
            offset_y: viewport.absolute_offset().y,
            fraction: viewport.relative_offset().y,
        });

    scroll_lock(scrollable, app.scroll_locked).into()
}

fn section_heading<'a>(label: String) -> Text<'a> {
    Text::new(label).size(typography::TITLE_LG)
}

fn projects_section<'a>(
    catalog: &'a Catalog,
    filter: &ProjectFilter,
    reveal: &RevealSchedule,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut chips = Row::new().spacing(spacing::XS).push(filter_chip(
        i18n.tr("filter-all"),
        ProjectFilter::All,
        filter,
    ));
    for category in catalog.categories() {
        chips = chips.push(filter_chip(
            category.clone(),
            ProjectFilter::Category(category),
            filter,
        ));
    }

    let cards: Vec<Element<'a, Message>> = filter
        .visible_indices(&catalog.projects)
        .into_iter()
        .enumerate()
        .map(|(position, index)| project_card(&catalog.projects[index], reveal.state(position)))
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .push(section_heading(i18n.tr("section-projects")))
        .push(chips.wrap().vertical_spacing(spacing::XS))
        .push(
            Row::with_children(cards)
                .spacing(spacing::LG)
                .wrap()
                .vertical_spacing(spacing::LG),
        )
        .into()
}

fn filter_chip<'a>(
    label: String,
    value: ProjectFilter,
    current: &ProjectFilter,
) -> Element<'a, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if *current == value {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .on_press(Message::FilterSelected(value))
        .style(style)
        .into()
}

fn project_card<'a>(project: &'a Project, reveal: Reveal) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM));
    if !project.description.is_empty() {
        body = body.push(Text::new(project.description.as_str()).size(typography::BODY));
    }
    if !project.categories.is_empty() {
        body = body.push(Text::new(project.categories.join(" · ")).size(typography::CAPTION));
    }

    revealed_card(body, reveal)
}

fn designs_section<'a>(
    catalog: &'a Catalog,
    reveal: &RevealSchedule,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = catalog
        .designs
        .iter()
        .enumerate()
        .map(|(index, design)| design_card(index, design, reveal.state(index), i18n))
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .push(section_heading(i18n.tr("section-designs")))
        .push(
            Row::with_children(cards)
                .spacing(spacing::LG)
                .wrap()
                .vertical_spacing(spacing::LG),
        )
        .into()
}

fn design_card<'a>(
    index: usize,
    design: &'a DesignCard,
    reveal: Reveal,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let mut body = Column::new().spacing(spacing::SM);
    if let Some(heading) = design.heading.as_deref() {
        body = body.push(Text::new(heading).size(typography::TITLE_SM));
    }
    if let Some(summary) = design.summary.as_deref() {
        body = body.push(Text::new(summary).size(typography::BODY));
    }

    body = body.push(
        button(Text::new(i18n.tr("design-view-images")))
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::OpenDesign(index))
            .style(styles::button::primary),
    );

    revealed_card(body, reveal)
}

fn skills_section<'a>(
    catalog: &'a Catalog,
    reveal: &RevealSchedule,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    if catalog.skills.is_empty() {
        return Space::new().into();
    }

    let bars = catalog
        .skills
        .iter()
        .enumerate()
        .map(|(index, skill)| skill_bar(skill, reveal.state(index)));

    Column::new()
        .spacing(spacing::LG)
        .push(section_heading(i18n.tr("section-skills")))
        .push(
            Column::with_children(bars)
                .spacing(spacing::MD)
                .max_width(sizing::CONTENT_MAX_WIDTH / 2.0),
        )
        .into()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn skill_bar<'a>(skill: &'a Skill, reveal: Reveal) -> Element<'a, Message> {
    let filled = (skill.animated_fraction(reveal) * 1000.0).round() as u16;

    let label = Row::new()
        .push(
            Text::new(skill.name.as_str())
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(Text::new(format!("{}%", skill.level.min(100))).size(typography::CAPTION));

    let bar = Container::new(
        Row::new()
            .push(
                Container::new(Space::new())
                    .width(Length::FillPortion(filled))
                    .height(Length::Fill)
                    .style(styles::container::skill_fill),
            )
            .push(Space::new().width(Length::FillPortion(1000 - filled))),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::SKILL_BAR_HEIGHT))
    .style(styles::container::track);

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(bar)
        .into()
}

/// Wraps card content with its entrance fade and upward slide.
///
/// The slide moves the card within a fixed band, so neighbours never reflow.
fn revealed_card<'a>(
    body: impl Into<Element<'a, Message>>,
    reveal: Reveal,
) -> Element<'a, Message> {
    let offset = reveal.slide_offset();

    let card = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card(reveal.opacity()));

    Container::new(card)
        .padding(Padding {
            top: offset,
            right: 0.0,
            bottom: REVEAL_SLIDE_DISTANCE - offset,
            left: 0.0,
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::portfolio::Catalog;
    use std::time::Instant;

    const CATALOG: &str = r#"
owner = "Dana Reyes"

[[projects]]
title = "Gear Train"
categories = ["cad"]

[[designs]]
heading = "Bracket Assembly"
images = '["a.png"]'

[[skills]]
name = "SolidWorks"
level = 90
"#;

    #[test]
    fn page_builds_with_every_section() {
        let catalog = Catalog::parse(CATALOG, "/portfolio").expect("catalog parses");
        let app = App::with_catalog(
            I18n::default(),
            &Config::default(),
            Some(catalog),
            Instant::now(),
        );
        let _ = view(&app);
    }

    #[test]
    fn page_builds_without_catalog() {
        let app = App::with_catalog(I18n::default(), &Config::default(), None, Instant::now());
        let _ = view(&app);
    }

    #[test]
    fn skill_bar_builds_at_every_stage() {
        let skill = Skill {
            name: "CNC".into(),
            level: 100,
        };
        for reveal in [Reveal::Hidden, Reveal::Entering(0.5), Reveal::Visible] {
            let _ = skill_bar(&skill, reveal);
        }
    }
}
