// SPDX-License-Identifier: MPL-2.0
pub mod orb_field;
pub mod progress_ribbon;
pub mod ripple_overlay;

pub use orb_field::OrbField;
pub use progress_ribbon::ProgressRibbon;
pub use ripple_overlay::RippleOverlay;
