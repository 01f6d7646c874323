// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Project or design card.
///
/// `alpha` comes from the card's reveal state; background, border and text
/// fade together.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let extended = theme.extended_palette();
        let fade = |color: Color| Color {
            a: color.a * alpha,
            ..color
        };

        container::Style {
            background: Some(Background::Color(fade(extended.background.weak.color))),
            text_color: Some(fade(extended.background.base.text)),
            border: Border {
                color: fade(extended.background.strong.color),
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: Shadow {
                color: fade(Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..palette::BLACK
                }),
                ..shadow::SM
            },
            ..Default::default()
        }
    }
}

/// Page header; gains a shadow once the page is scrolled.
pub fn header(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        shadow: if elevated {
            Shadow {
                color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                },
                ..shadow::MD
            }
        } else {
            shadow::NONE
        },
        ..Default::default()
    }
}

/// Filled part of the scroll progress bar.
pub fn progress_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        ..Default::default()
    }
}

/// Empty part of a skill bar.
pub fn track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.strong.color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled part of a skill bar.
pub fn skill_fill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the gallery modal.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Gallery modal body.
pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::GRAY_700,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
