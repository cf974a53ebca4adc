// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (a feature was opened, the mentor replied, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels and
//!   the age-driven `Phase` timeline
//! - [`presenter`] - `Presenter` holding the live stack and pruning expired toasts
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Presenter};
//!
//! // Create a presenter
//! let mut presenter = Presenter::new();
//!
//! // Present a notification
//! presenter.present(Notification::info("notification-welcome"));
//!
//! // On each frame tick, drop expired toasts
//! presenter.tick(std::time::Instant::now());
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&presenter, &i18n, now, false);
//! ```
//!
//! # Design Considerations
//!
//! - Fixed timeline: 100 ms entry beat, 3 s on screen, 300 ms exit slide
//! - No cap and no manual dismissal; bursts stack until they age out
//! - Position: top-right corner

mod notification;
mod presenter;
mod toast;

pub use notification::{Notification, NotificationId, Phase, Severity};
pub use presenter::Presenter;
pub use toast::Toast;
