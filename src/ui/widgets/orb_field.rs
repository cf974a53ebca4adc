// SPDX-License-Identifier: MPL-2.0
//! Decorative hero backdrop: soft brand-colored orbs on parallax layers.
//!
//! Each orb belongs to one parallax layer, so pointer movement drifts the
//! orbs by different amounts and the backdrop gains depth. The geometry is
//! cached by the application and redrawn only when the parallax retargets.

use crate::ui::design_tokens::opacity;
use crate::ui::state::parallax::{ParallaxField, LAYER_COUNT};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Anchor of each orb as a fraction of the backdrop size.
const ANCHORS: [(f32, f32); LAYER_COUNT] = [(0.18, 0.30), (0.72, 0.22), (0.50, 0.68)];

/// Radius of each orb as a fraction of the backdrop width.
const RADII: [f32; LAYER_COUNT] = [0.22, 0.16, 0.12];

/// Resolved center of an orb after applying its layer's parallax drift.
fn orb_center(anchor: (f32, f32), drift: (f32, f32), size: Size) -> Point {
    Point::new(
        anchor.0 * size.width + drift.0,
        anchor.1 * size.height + drift.1,
    )
}

/// Canvas program rendering the orb backdrop.
pub struct OrbField<'a> {
    cache: &'a Cache,
    field: &'a ParallaxField,
    primary: Color,
    secondary: Color,
}

impl<'a> OrbField<'a> {
    #[must_use]
    pub fn new(
        cache: &'a Cache,
        field: &'a ParallaxField,
        primary: Color,
        secondary: Color,
    ) -> Self {
        Self {
            cache,
            field,
            primary,
            secondary,
        }
    }

    /// Creates a Canvas widget filling its container.
    pub fn into_element<Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn orb_color(&self, layer: usize) -> Color {
        let base = if layer % 2 == 0 {
            self.primary
        } else {
            self.secondary
        };
        Color {
            a: opacity::ORB,
            ..base
        }
    }
}

impl<'a, Message> canvas::Program<Message> for OrbField<'a> {
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
                let size = frame.size();
                for layer in 0..LAYER_COUNT {
                    let center = orb_center(ANCHORS[layer], self.field.layer_offset(layer), size);
                    let orb = Path::circle(center, RADII[layer] * size.width);
                    frame.fill(&orb, self.orb_color(layer));
                }
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn every_layer_has_an_anchor_and_a_radius() {
        assert_eq!(ANCHORS.len(), LAYER_COUNT);
        assert_eq!(RADII.len(), LAYER_COUNT);
    }

    #[test]
    fn orb_center_applies_the_drift() {
        let size = Size::new(1000.0, 500.0);
        let rest = orb_center((0.5, 0.5), (0.0, 0.0), size);
        assert_abs_diff_eq!(rest.x, 500.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(rest.y, 250.0, epsilon = F32_EPSILON);

        let drifted = orb_center((0.5, 0.5), (-7.5, 3.0), size);
        assert_abs_diff_eq!(drifted.x, 492.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(drifted.y, 253.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn orbs_alternate_brand_colors() {
        let cache = Cache::default();
        let field = ParallaxField::default();
        let orbs = OrbField::new(
            &cache,
            &field,
            Color::from_rgb(0.4, 0.49, 0.92),
            Color::from_rgb(0.46, 0.29, 0.64),
        );

        let first = orbs.orb_color(0);
        let second = orbs.orb_color(1);
        assert_ne!((first.r, first.g, first.b), (second.r, second.g, second.b));
        assert_abs_diff_eq!(first.a, opacity::ORB, epsilon = F32_EPSILON);
    }
}
