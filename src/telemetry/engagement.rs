// SPDX-License-Identifier: MPL-2.0
//! Visibility-based engagement tracking.

use std::time::{Duration, Instant};

/// Tracks how long the window has been continuously visible.
///
/// The span restarts every time the window regains visibility, so `read`
/// reports the current uninterrupted stretch rather than a lifetime total.
/// While the window is hidden there is no span to read.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngagementTracker {
    visible_since: Option<Instant>,
}

impl EngagementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins the session with the window visible.
    pub fn start(&mut self, now: Instant) {
        self.visible_since = Some(now);
    }

    /// Records a visibility change. Regaining visibility restarts the span;
    /// repeated reports of the same state are ignored.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if visible {
            if self.visible_since.is_none() {
                self.visible_since = Some(now);
            }
        } else {
            self.visible_since = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible_since.is_some()
    }

    /// Returns the current visible span, or `None` while hidden.
    pub fn read(&self, now: Instant) -> Option<Duration> {
        self.visible_since
            .map(|since| now.saturating_duration_since(since))
    }

    /// Returns the current visible span rounded to whole seconds.
    pub fn read_seconds(&self, now: Instant) -> Option<u64> {
        self.read(now).map(|span| span.as_secs_f64().round() as u64)
    }
}
