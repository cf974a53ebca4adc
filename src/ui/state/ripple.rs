// SPDX-License-Identifier: MPL-2.0
//! One-shot press ripples.
//!
//! Pressing a card spawns an expanding, fading circle at the press point.
//! Each ripple runs its fixed course and is pruned when the clock expires;
//! repeated presses stack independent ripples.

use std::time::{Duration, Instant};

/// Total lifetime of a ripple.
pub const RIPPLE_RUN: Duration = Duration::from_millis(600);

/// How many times the base radius the circle grows to.
const EXPANSION: f32 = 4.0;

/// A single expanding press flash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    center: (f32, f32),
    started: Instant,
}

impl Ripple {
    #[must_use]
    pub fn new(center: (f32, f32), now: Instant) -> Self {
        Self {
            center,
            started: now,
        }
    }

    /// Press point, local to the host widget.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        self.center
    }

    /// Progress in `[0, 1)`, or `None` once the run has completed.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= RIPPLE_RUN {
            None
        } else {
            Some(elapsed.as_secs_f32() / RIPPLE_RUN.as_secs_f32())
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.progress(now).is_none()
    }

    /// Circle radius at `progress` for a host of the given size.
    ///
    /// Grows from zero to four times half the larger host dimension, so
    /// the flash always outgrows the host before it fades.
    #[must_use]
    pub fn radius(progress: f32, host: (f32, f32)) -> f32 {
        let base = host.0.max(host.1) / 2.0;
        base * EXPANSION * progress
    }

    /// Opacity at `progress`: fades linearly to zero.
    #[must_use]
    pub fn alpha(progress: f32) -> f32 {
        (1.0 - progress).clamp(0.0, 1.0)
    }
}
