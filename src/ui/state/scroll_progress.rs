// SPDX-License-Identifier: MPL-2.0
//! Read-progress arithmetic for the page scroll position.

/// Furthest the viewport can scroll for the given page and viewport heights.
///
/// Zero when the whole page fits on screen.
#[must_use]
pub fn max_offset(page_height: f32, viewport_height: f32) -> f32 {
    (page_height - viewport_height).max(0.0)
}

/// Scrolled fraction in `[0, 1]`.
///
/// This is both the fill of the progress ribbon and the relative offset the
/// scrollable expects when snapping. A page that cannot scroll reads 0.
#[must_use]
pub fn fraction(offset_y: f32, page_height: f32, viewport_height: f32) -> f32 {
    let travel = max_offset(page_height, viewport_height);
    if travel <= 0.0 {
        return 0.0;
    }
    (offset_y / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn fraction_tracks_the_scrollable_distance() {
        // 1800px page behind a 700px viewport leaves 1100px of travel.
        assert_abs_diff_eq!(fraction(0.0, 1800.0, 700.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(fraction(550.0, 1800.0, 700.0), 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(fraction(1100.0, 1800.0, 700.0), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fraction_clamps_overscroll() {
        assert_abs_diff_eq!(fraction(1500.0, 1800.0, 700.0), 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(fraction(-40.0, 1800.0, 700.0), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn short_page_reads_zero() {
        assert_abs_diff_eq!(fraction(0.0, 500.0, 700.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(fraction(120.0, 700.0, 700.0), 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn max_offset_never_goes_negative() {
        assert_abs_diff_eq!(max_offset(1800.0, 700.0), 1100.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(max_offset(500.0, 700.0), 0.0, epsilon = F32_EPSILON);
    }
}
