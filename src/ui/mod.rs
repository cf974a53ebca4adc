// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`sections`] - The four landing sections: hero, features, mentor, footer
//! - [`navbar`] - Fixed navigation bar with section links and theme toggle
//! - [`notifications`] - Toast notification system with a fixed lifecycle
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable motion state machines (debounce, reveal, tilt)
//! - [`widgets`] - Custom Iced widgets (orb backdrop, ribbon, ripples)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod state;
pub mod theming;
pub mod widgets;
