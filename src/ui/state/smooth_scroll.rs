// SPDX-License-Identifier: MPL-2.0
//! Animated scroll-to-section with exponential ease-out.
//!
//! Navigation requests do not jump the viewport. The follower starts at the
//! live offset and closes the gap to the target a fixed fraction per frame,
//! which reads as fast departure and gentle arrival. A new request mid-flight
//! simply retargets from wherever the viewport currently is.

/// Fraction of the remaining distance closed on each tick.
const SPEED: f32 = 0.2;

/// Remaining distances below this snap straight to the target.
const SNAP_THRESHOLD: f32 = 0.5;

/// Eased follower for absolute page offsets.
#[derive(Debug, Clone, Default)]
pub struct SmoothScroll {
    target: f32,
    /// Signed distance still to travel. Zero means settled.
    remaining: f32,
    active: bool,
}

impl SmoothScroll {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) an eased run from `from` toward `to`.
    pub fn begin(&mut self, from: f32, to: f32) {
        self.target = to;
        self.remaining = to - from;
        if self.remaining.abs() < SNAP_THRESHOLD {
            self.remaining = 0.0;
            self.active = false;
        } else {
            self.active = true;
        }
    }

    /// Advance one frame.
    ///
    /// Returns the next absolute offset to apply, or `None` once settled.
    /// The final frame emits exactly the target before going idle.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.active {
            return None;
        }
        self.remaining *= 1.0 - SPEED;
        if self.remaining.abs() < SNAP_THRESHOLD {
            self.remaining = 0.0;
            self.active = false;
        }
        Some(self.target - self.remaining)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active
    }

    /// Offset the follower is heading toward while a run is live.
    #[must_use]
    pub fn target(&self) -> Option<f32> {
        self.active.then_some(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn idle_follower_emits_nothing() {
        let mut scroll = SmoothScroll::new();
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);
    }

    #[test]
    fn first_frame_closes_a_fifth_of_the_gap() {
        let mut scroll = SmoothScroll::new();
        scroll.begin(0.0, 1000.0);

        let next = scroll.tick().unwrap();
        assert_abs_diff_eq!(next, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn run_settles_exactly_on_the_target() {
        let mut scroll = SmoothScroll::new();
        scroll.begin(0.0, 560.0);

        let mut last = 0.0;
        let mut frames = 0;
        while let Some(offset) = scroll.tick() {
            last = offset;
            frames += 1;
            assert!(frames < 200, "follower failed to settle");
        }

        assert_abs_diff_eq!(last, 560.0, epsilon = F32_EPSILON);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);
    }

    #[test]
    fn progress_is_monotonic_toward_the_target() {
        let mut scroll = SmoothScroll::new();
        scroll.begin(300.0, 0.0);

        let mut previous = 300.0;
        while let Some(offset) = scroll.tick() {
            assert!(offset < previous);
            previous = offset;
        }
        assert_abs_diff_eq!(previous, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn retarget_restarts_from_the_live_offset() {
        let mut scroll = SmoothScroll::new();
        scroll.begin(0.0, 1000.0);
        let reached = scroll.tick().unwrap();

        scroll.begin(reached, 100.0);
        let next = scroll.tick().unwrap();

        // Heading back down toward the new target, not the old one.
        assert!(next < reached);
        assert_eq!(scroll.target(), Some(100.0));
    }

    #[test]
    fn tiny_distances_snap_without_animating() {
        let mut scroll = SmoothScroll::new();
        scroll.begin(100.0, 100.3);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.tick(), None);
    }
}
