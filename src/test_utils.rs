// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for the unit tests.
//!
//! The motion state machines are float-heavy, so their tests compare within
//! an epsilon via the `approx` crate instead of relying on `assert_eq!`.

pub use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_relative_ne};

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
