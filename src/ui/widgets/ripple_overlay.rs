// SPDX-License-Identifier: MPL-2.0
//! Press-ripple overlay drawn on top of a feature card.

use std::time::Instant;

use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme};

use crate::ui::state::Ripple;

/// Peak opacity of a ripple at the moment it spawns.
const PEAK_ALPHA: f32 = 0.3;

/// Canvas layer that renders every in-flight ripple of one card.
///
/// Ripples are transient, so geometry is rebuilt each frame instead of
/// going through a cache. The canvas clips to the card bounds, which gives
/// the circle its clipped-to-card look as it outgrows the host.
pub struct RippleOverlay<'a> {
    ripples: &'a [Ripple],
    now: Instant,
    color: Color,
}

impl<'a> RippleOverlay<'a> {
    #[must_use]
    pub fn new(ripples: &'a [Ripple], now: Instant, color: Color) -> Self {
        Self {
            ripples,
            now,
            color,
        }
    }

    #[must_use]
    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        canvas::Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<'a, Message> canvas::Program<Message> for RippleOverlay<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        for ripple in self.ripples {
            if let Some(progress) = ripple.progress(self.now) {
                let (x, y) = ripple.center();
                let radius = Ripple::radius(progress, (bounds.width, bounds.height));
                let alpha = Ripple::alpha(progress) * PEAK_ALPHA;
                let path = canvas::Path::circle(Point::new(x, y), radius);
                frame.fill(
                    &path,
                    Color {
                        a: alpha,
                        ..self.color
                    },
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    #[test]
    fn fresh_ripple_draws_at_peak_alpha() {
        let now = Instant::now();
        let ripple = Ripple::new((10.0, 10.0), now);

        let progress = ripple.progress(now).expect("just spawned");
        assert_abs_diff_eq!(
            Ripple::alpha(progress) * PEAK_ALPHA,
            PEAK_ALPHA,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn expired_ripples_contribute_nothing() {
        let now = Instant::now();
        let ripple = Ripple::new((10.0, 10.0), now);

        assert!(ripple
            .progress(now + Duration::from_millis(700))
            .is_none());
    }
}
