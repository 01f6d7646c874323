// SPDX-License-Identifier: MPL-2.0
//! Loading spinner drawn on a canvas.
//!
//! The rotation is owned by the caller and advanced on ticks, so the widget
//! itself is stateless.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path, Canvas, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;

/// A half-circle arc turning over a faint full ring.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner drawn at `rotation` radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the default edge length (used for thumbnails).
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = (frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0).max(1.0);

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..self.color
            }),
        );

        // Start at the top of the ring.
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.arc(path::Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + PI),
            });
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
