// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, `Severity` enum, and the
//! fixed three-beat `Phase` timeline every toast runs through.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Pause before the slide-in starts.
pub const ENTRY_DELAY: Duration = Duration::from_millis(100);

/// Age at which the exit slide begins.
pub const DISPLAY_UNTIL: Duration = Duration::from_millis(3000);

/// Length of the exit slide.
pub const EXIT_RUN: Duration = Duration::from_millis(300);

/// Age at which the toast leaves the tree entirely.
pub const REMOVE_AFTER: Duration = Duration::from_millis(3300);

// The removal deadline is the exit start plus the exit run.
const _: () = assert!(REMOVE_AFTER.as_millis() == DISPLAY_UNTIL.as_millis() + EXIT_RUN.as_millis());

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling only; every toast shares the
/// same timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
        }
    }
}

/// Where a notification sits in its lifetime.
///
/// Phases are pure functions of age, so any observer that knows a creation
/// time can reconstruct the whole timeline without stored flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but still off-screen.
    Entering,
    /// Slid in and readable.
    Visible,
    /// Sliding back out and fading.
    Exiting,
    /// Past the removal deadline; drop it from the tree.
    Removed,
}

impl Phase {
    /// Phase for a notification of the given age.
    #[must_use]
    pub fn at(age: Duration) -> Self {
        if age < ENTRY_DELAY {
            Phase::Entering
        } else if age < DISPLAY_UNTIL {
            Phase::Visible
        } else if age < REMOVE_AFTER {
            Phase::Exiting
        } else {
            Phase::Removed
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines the accent color).
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
    /// When this notification was created.
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
        }
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Adds an argument for message interpolation.
    ///
    /// Arguments are passed to the i18n system when resolving the message.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the message arguments for interpolation.
    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Age as observed at `now`. Saturates to zero for clocks behind
    /// the creation time.
    #[must_use]
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Lifecycle phase as observed at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> Phase {
        Phase::at(self.age_at(now))
    }

    /// Whether the removal deadline has passed at `now`.
    #[must_use]
    pub fn is_removed(&self, now: Instant) -> bool {
        self.phase(now) == Phase::Removed
    }
}
