// SPDX-License-Identifier: MPL-2.0
//! The four page sections of the landing window, in scroll order.
//!
//! Every section view takes the whole [`App`](crate::app::App) because the
//! sections read cross-cutting state: the reveal tracker, the motion state
//! machines, and the active color scheme. Section heights are fixed by
//! `app::section` so the views and the scroll geometry cannot drift apart.

pub mod assistant;
pub mod features;
pub mod footer;
pub mod hero;

use iced::Color;

/// A color with its alpha scaled by an entrance progress factor.
///
/// Revealed content fades in by ramping every color it paints with, so a
/// section at progress zero is fully transparent rather than absent.
pub(crate) fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn fading_scales_existing_alpha() {
        let half = Color {
            a: 0.5,
            ..Color::BLACK
        };
        assert_abs_diff_eq!(faded(half, 0.5).a, 0.25, epsilon = F32_EPSILON);
    }

    #[test]
    fn fade_factor_is_clamped() {
        assert_abs_diff_eq!(faded(Color::WHITE, 1.5).a, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(faded(Color::WHITE, -0.5).a, 0.0, epsilon = F32_EPSILON);
    }
}
