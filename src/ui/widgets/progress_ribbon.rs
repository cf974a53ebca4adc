// SPDX-License-Identifier: MPL-2.0
//! Thin read-progress ribbon pinned under the navbar.
//!
//! The ribbon fills left to right as the page scrolls, mirroring the
//! scrolled fraction exactly. It is cached and redrawn only when the
//! debounced fraction actually changes.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Canvas program rendering the progress ribbon.
pub struct ProgressRibbon<'a> {
    cache: &'a Cache,
    /// Scrolled fraction in `[0, 1]`.
    fraction: f32,
    color: Color,
}

impl<'a> ProgressRibbon<'a> {
    #[must_use]
    pub fn new(cache: &'a Cache, fraction: f32, color: Color) -> Self {
        Self {
            cache,
            fraction: fraction.clamp(0.0, 1.0),
            color,
        }
    }

    /// Creates a Canvas widget spanning the window width.
    pub fn into_element<Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::RIBBON_HEIGHT))
            .into()
    }

    fn fill_width(&self, total: f32) -> f32 {
        total * self.fraction
    }
}

impl<'a, Message> canvas::Program<Message> for ProgressRibbon<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let width = self.fill_width(frame.width());
                if width > 0.0 {
                    let bar = Path::rectangle(
                        Point::ORIGIN,
                        Size::new(width, frame.height()),
                    );
                    frame.fill(&bar, self.color);
                }
            });

        vec![geometry]
    }
}
