// SPDX-License-Identifier: MPL-2.0
//! Console-only session telemetry.
//!
//! The landing window reports two things: how long startup took, and how
//! long the user kept the window visible. Both go to stderr as plain
//! diagnostic text; nothing is transmitted or persisted.

mod engagement;

pub use engagement::EngagementTracker;

use std::time::Instant;

/// Writes a timestamped diagnostic line to stderr.
pub fn log(message: &str) {
    let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
    eprintln!("[{stamp}] {message}");
}

/// Reports the time from process launch to the first frame being scheduled.
pub fn report_startup(launched_at: Instant) {
    log(&format!(
        "Window ready in {} ms",
        launched_at.elapsed().as_millis()
    ));
}

/// Reports the current engagement span, if the window is visible.
///
/// Nothing is logged when the window is already hidden at shutdown.
pub fn report_engagement(tracker: &EngagementTracker, now: Instant) {
    if let Some(seconds) = tracker.read_seconds(now) {
        log(&format!("Session engaged for {seconds} seconds"));
    }
}
