// SPDX-License-Identifier: MPL-2.0
//! Styles for indicators drawn over gallery images.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Pill used for the `current / total` counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Panel replacing an image that failed to load.
pub fn failure(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ERROR_500
        })),
        text_color: Some(WHITE),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: rad.into(),
        },
        ..Default::default()
    }
}
