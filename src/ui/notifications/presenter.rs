// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Presenter` owns every live toast and prunes the ones whose removal
//! deadline has passed. There is no cap and no manual dismissal: each toast
//! runs its fixed timeline and leaves on its own, so a burst of
//! notifications simply stacks until the oldest ones age out.

use super::notification::Notification;
use std::time::Instant;

/// Holds live notifications in presentation order (oldest first).
#[derive(Debug, Default)]
pub struct Presenter {
    notifications: Vec<Notification>,
}

impl Presenter {
    /// Creates a new empty presenter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification to the stack.
    ///
    /// The toast starts its timeline from its own creation instant, so two
    /// presents in quick succession exit in the order they arrived.
    pub fn present(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drops every notification whose removal deadline has passed at `now`.
    ///
    /// Returns how many were removed. Should be called from the frame tick
    /// while any toast is live.
    pub fn tick(&mut self, now: Instant) -> usize {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_removed(now));
        before - self.notifications.len()
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    /// Number of live notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Returns whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Returns whether any toast is live (and the tick should keep running).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.notifications.is_empty()
    }
}
