// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action (design card "view" buttons).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_400, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Active filter chip.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => unselected(theme, status),
        _ => button::Style {
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            ..primary(theme, status)
        },
    }
}

/// Inactive filter chip and secondary header buttons.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = !theme.extended_palette().is_dark;

    let (background, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let (background, border_color, text_color) = match status {
        button::Status::Hovered => (
            if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            },
            palette::PRIMARY_500,
            text_color,
        ),
        button::Status::Disabled => (background, palette::GRAY_400, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (background, palette::GRAY_400, text_color)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent buttons over the gallery image (previous, next, close).
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered => (opacity::OVERLAY_HOVER, WHITE),
        button::Status::Pressed => (opacity::OVERLAY_PRESSED, WHITE),
        button::Status::Disabled => (
            opacity::OVERLAY_SUBTLE,
            Color {
                a: opacity::DISABLED,
                ..WHITE
            },
        ),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, WHITE),
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Disabled) {
            shadow::NONE
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Thumbnail in the gallery strip; the active one carries a brand outline.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let border_color = match (active, status) {
            (true, _) => palette::PRIMARY_400,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            (false, _) => Color::TRANSPARENT,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..BLACK
            })),
            text_color: WHITE,
            border: Border {
                color: border_color,
                width: border::WIDTH_LG,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn overlay_button_dims_when_disabled() {
        let active = overlay(&Theme::Dark, button::Status::Active);
        let disabled = overlay(&Theme::Dark, button::Status::Disabled);
        assert_ne!(active.background, disabled.background);
        assert!(disabled.text_color.a < active.text_color.a);
    }

    #[test]
    fn only_active_thumbnail_is_outlined() {
        let active = thumbnail(true)(&Theme::Dark, button::Status::Active);
        let idle = thumbnail(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.border.color, palette::PRIMARY_400);
        assert_eq!(idle.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn filter_chips_differ_by_selection() {
        let on = selected(&Theme::Light, button::Status::Active);
        let off = unselected(&Theme::Light, button::Status::Active);
        assert_ne!(on.background, off.background);
    }
}
