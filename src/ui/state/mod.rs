// SPDX-License-Identifier: MPL-2.0
//! Motion and interaction state machines.
//!
//! Each machine owns one animated concern and is advanced from the update
//! loop, so every piece can be driven and tested without a running window.

pub mod debounce;
pub mod parallax;
pub mod reveal;
pub mod ripple;
pub mod scroll_progress;
pub mod smooth_scroll;
pub mod tilt;

// Re-export commonly used types for convenience
pub use debounce::Debouncer;
pub use parallax::ParallaxField;
pub use reveal::RevealTracker;
pub use ripple::Ripple;
pub use smooth_scroll::SmoothScroll;
pub use tilt::TiltState;
