// SPDX-License-Identifier: MPL-2.0
//! Scroll-reveal tracking for page regions.
//!
//! A [`RevealTracker`] watches registered page-space regions and latches each
//! one `active` the first time enough of it is visible in the scroll
//! viewport. Activation is a one-way latch: once a region has revealed, no
//! later scroll position can undo it. Regions registered as part of the
//! staggered group additionally receive an entrance delay proportional to
//! their position, so a row of cards reveals as a cascade.
//!
//! Regions span the full content width, so the visible-area fraction reduces
//! to the vertical overlap between the region and the viewport.

use std::time::{Duration, Instant};

/// Fraction of a region that must be visible before it reveals.
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

/// The effective viewport bottom sits this many pixels above the real one,
/// so regions reveal only once they are decisively on screen.
pub const BOTTOM_BIAS: f32 = 50.0;

/// Entrance delay between consecutive members of the staggered group.
pub const STAGGER_STEP: Duration = Duration::from_millis(200);

/// How long a region's entrance animation runs once its delay has elapsed.
pub const ENTRANCE_RUN: Duration = Duration::from_millis(800);

/// A vertical slice of the page, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    #[must_use]
    pub const fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Fraction of this region visible in `[offset_y, offset_y + viewport_height)`,
    /// with the bottom edge pulled up by [`BOTTOM_BIAS`].
    #[must_use]
    pub fn visible_fraction(&self, offset_y: f32, viewport_height: f32) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let viewport_bottom = offset_y + viewport_height - BOTTOM_BIAS;
        let overlap_top = self.top.max(offset_y);
        let overlap_bottom = (self.top + self.height).min(viewport_bottom);
        ((overlap_bottom - overlap_top) / self.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug)]
struct Entry<K> {
    key: K,
    region: Region,
    staggered: bool,
    activated_at: Option<Instant>,
    entrance_delay: Duration,
    observed: bool,
}

/// Watches registered regions and reveals each one exactly once.
#[derive(Debug, Default)]
pub struct RevealTracker<K> {
    entries: Vec<Entry<K>>,
}

impl<K: Copy + PartialEq> RevealTracker<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers a region for observation.
    ///
    /// Re-registering an existing key updates its geometry but never clears
    /// an activation that already latched.
    pub fn observe(&mut self, key: K, region: Region) {
        self.insert(key, region, false);
    }

    /// Registers a region as a member of the staggered group.
    ///
    /// Group position follows registration order among staggered entries.
    pub fn observe_staggered(&mut self, key: K, region: Region) {
        self.insert(key, region, true);
    }

    fn insert(&mut self, key: K, region: Region, staggered: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.region = region;
            entry.staggered = staggered;
        } else {
            self.entries.push(Entry {
                key,
                region,
                staggered,
                activated_at: None,
                entrance_delay: Duration::ZERO,
                observed: true,
            });
        }
    }

    /// Stops observing a key. The activation latch, if set, survives.
    pub fn release(&mut self, key: K) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.observed = false;
        }
    }

    /// Re-evaluates every observed region against the new viewport and
    /// returns the keys that just activated, in registration order.
    ///
    /// Activated regions are released automatically; with nothing registered
    /// this is a no-op.
    pub fn viewport_changed(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        now: Instant,
    ) -> Vec<K> {
        let mut activated = Vec::new();
        let mut staggered_activated = false;

        for entry in &mut self.entries {
            if !entry.observed || entry.activated_at.is_some() {
                continue;
            }
            let fraction = entry.region.visible_fraction(offset_y, viewport_height);
            if fraction >= VISIBILITY_THRESHOLD {
                entry.activated_at = Some(now);
                entry.observed = false;
                staggered_activated |= entry.staggered;
                activated.push(entry.key);
            }
        }

        // Any staggered activation reassigns the whole group's delays.
        // The assignment depends only on group order, so repeating it is
        // idempotent no matter which member fired.
        if staggered_activated {
            self.assign_staggered_delays();
        }

        activated
    }

    fn assign_staggered_delays(&mut self) {
        let mut position: u32 = 0;
        for entry in &mut self.entries {
            if entry.staggered {
                entry.entrance_delay = STAGGER_STEP * position;
                position += 1;
            }
        }
    }

    #[must_use]
    pub fn is_active(&self, key: K) -> bool {
        self.activated_at(key).is_some()
    }

    /// When the region activated, if it has.
    #[must_use]
    pub fn activated_at(&self, key: K) -> Option<Instant> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.activated_at)
    }

    /// The entrance delay currently assigned to a key.
    ///
    /// Zero until the staggered group has seen its first activation.
    #[must_use]
    pub fn entrance_delay(&self, key: K) -> Duration {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.entrance_delay)
            .unwrap_or(Duration::ZERO)
    }

    /// Progress of a key's entrance animation in `[0, 1]`.
    ///
    /// Stays at zero while inactive or still inside the entrance delay, and
    /// saturates at one once the run completes.
    #[must_use]
    pub fn entrance_progress(&self, key: K, now: Instant) -> f32 {
        let Some(entry) = self.entries.iter().find(|entry| entry.key == key) else {
            return 0.0;
        };
        let Some(since) = entry.activated_at else {
            return 0.0;
        };
        let start = since + entry.entrance_delay;
        if now <= start {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / ENTRANCE_RUN.as_secs_f32()).min(1.0)
    }

    /// Whether any entrance animation is still running.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|entry| {
            entry
                .activated_at
                .map(|since| now < since + entry.entrance_delay + ENTRANCE_RUN)
                .unwrap_or(false)
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.activated_at.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const VIEWPORT_HEIGHT: f32 = 650.0;

    fn tracker_with_column() -> RevealTracker<u32> {
        // Four full-width cards stacked down the page.
        let mut tracker = RevealTracker::new();
        for i in 0..4u32 {
            tracker.observe_staggered(i, Region::new(1_000.0 + 300.0 * i as f32, 200.0));
        }
        tracker
    }

    #[test]
    fn nothing_activates_before_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1u32, Region::new(1_000.0, 100.0));

        // Effective bottom = 0 + 1059 - 50 = 1009: 9% visible.
        let activated = tracker.viewport_changed(0.0, 1_059.0, Instant::now());
        assert!(activated.is_empty());
        assert!(!tracker.is_active(1));
    }

    #[test]
    fn activation_fires_at_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1u32, Region::new(1_000.0, 100.0));

        // Effective bottom = 1010: exactly 10% visible.
        let activated = tracker.viewport_changed(0.0, 1_060.0, Instant::now());
        assert_eq!(activated, vec![1]);
        assert!(tracker.is_active(1));
    }

    #[test]
    fn bottom_bias_delays_activation_near_the_edge() {
        let region = Region::new(520.0, 100.0);

        // 40px of the region sits inside the literal viewport, but none of it
        // clears the biased bottom edge.
        assert_abs_diff_eq!(
            region.visible_fraction(0.0, 560.0),
            0.0,
            epsilon = F32_EPSILON
        );

        // Scrolled 60px further the region crosses the biased edge.
        assert!(region.visible_fraction(60.0, 560.0) >= VISIBILITY_THRESHOLD);
    }

    #[test]
    fn activation_latch_never_clears() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1u32, Region::new(100.0, 200.0));

        let activated = tracker.viewport_changed(0.0, VIEWPORT_HEIGHT, Instant::now());
        assert_eq!(activated, vec![1]);

        // Scroll far away: visibility drops to zero, the latch holds.
        let activated = tracker.viewport_changed(10_000.0, VIEWPORT_HEIGHT, Instant::now());
        assert!(activated.is_empty());
        assert!(tracker.is_active(1));

        // Even a re-registration keeps the latch.
        tracker.observe(1u32, Region::new(100.0, 200.0));
        assert!(tracker.is_active(1));
    }

    #[test]
    fn regions_only_activate_once() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1u32, Region::new(100.0, 200.0));

        let now = Instant::now();
        let first = tracker.viewport_changed(0.0, VIEWPORT_HEIGHT, now);
        let second = tracker.viewport_changed(0.0, VIEWPORT_HEIGHT, now);

        assert_eq!(first, vec![1]);
        assert!(second.is_empty());
        assert_eq!(tracker.active_count(), 1);
    }

    #[test]
    fn released_regions_never_activate() {
        let mut tracker = RevealTracker::new();
        tracker.observe(1u32, Region::new(100.0, 200.0));
        tracker.release(1);

        let activated = tracker.viewport_changed(0.0, VIEWPORT_HEIGHT, Instant::now());
        assert!(activated.is_empty());
        assert!(!tracker.is_active(1));
    }

    #[test]
    fn empty_tracker_is_a_no_op() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        assert!(tracker
            .viewport_changed(0.0, VIEWPORT_HEIGHT, Instant::now())
            .is_empty());
        assert!(tracker.is_empty());
    }

    #[test]
    fn staggered_delays_follow_group_position() {
        let mut tracker = tracker_with_column();

        // Scroll straight to the third card; it activates first.
        let activated = tracker.viewport_changed(1_600.0, VIEWPORT_HEIGHT, Instant::now());
        assert!(activated.contains(&2));

        // Delays depend only on group order, not on who activated.
        for i in 0..4u32 {
            assert_eq!(tracker.entrance_delay(i), STAGGER_STEP * i);
        }
    }

    #[test]
    fn stagger_assignment_is_idempotent_across_activation_orders() {
        let mut forward = tracker_with_column();
        let mut backward = tracker_with_column();
        let now = Instant::now();

        forward.viewport_changed(900.0, VIEWPORT_HEIGHT, now);
        forward.viewport_changed(2_000.0, VIEWPORT_HEIGHT, now);

        backward.viewport_changed(2_000.0, VIEWPORT_HEIGHT, now);
        backward.viewport_changed(900.0, VIEWPORT_HEIGHT, now);

        for i in 0..4u32 {
            assert_eq!(forward.entrance_delay(i), backward.entrance_delay(i));
            assert_eq!(forward.entrance_delay(i), STAGGER_STEP * i);
        }
    }

    #[test]
    fn solo_regions_do_not_join_the_staggered_group() {
        let mut tracker = tracker_with_column();
        tracker.observe(99u32, Region::new(0.0, 300.0));
        assert_eq!(tracker.len(), 5);

        tracker.viewport_changed(1_000.0, VIEWPORT_HEIGHT, Instant::now());
        assert_eq!(tracker.entrance_delay(99), Duration::ZERO);
    }

    #[test]
    fn entrance_progress_waits_for_the_delay() {
        let mut tracker = tracker_with_column();
        let t0 = Instant::now();
        tracker.viewport_changed(1_300.0, VIEWPORT_HEIGHT, t0);
        assert!(tracker.is_active(1));

        let delay = tracker.entrance_delay(1);
        assert_eq!(delay, STAGGER_STEP);

        // Still inside the delay: no movement.
        assert_abs_diff_eq!(
            tracker.entrance_progress(1, t0 + Duration::from_millis(100)),
            0.0,
            epsilon = F32_EPSILON
        );

        // Halfway through the run.
        let halfway = t0 + delay + Duration::from_millis(400);
        assert_abs_diff_eq!(
            tracker.entrance_progress(1, halfway),
            0.5,
            epsilon = 1e-3
        );

        // Saturates at one.
        let done = t0 + delay + ENTRANCE_RUN + Duration::from_millis(50);
        assert_abs_diff_eq!(tracker.entrance_progress(1, done), 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn is_animating_tracks_running_entrances() {
        let mut tracker = tracker_with_column();
        let t0 = Instant::now();
        tracker.viewport_changed(1_300.0, VIEWPORT_HEIGHT, t0);

        assert!(tracker.is_animating(t0 + Duration::from_millis(100)));

        // Past the last delay plus the run, everything has settled.
        let settled = t0 + STAGGER_STEP * 3 + ENTRANCE_RUN + Duration::from_millis(10);
        assert!(!tracker.is_animating(settled));
    }

    #[test]
    fn inactive_regions_report_zero_progress() {
        let tracker = tracker_with_column();
        assert_abs_diff_eq!(
            tracker.entrance_progress(0, Instant::now()),
            0.0,
            epsilon = F32_EPSILON
        );
        assert!(!tracker.is_animating(Instant::now()));
    }
}
