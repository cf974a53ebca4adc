// SPDX-License-Identifier: MPL-2.0
//! `skillforge-landing` is the SkillForge desktop landing window, built with
//! the Iced GUI framework.
//!
//! It renders a scrollable marketing page with scroll-reveal animations,
//! pointer-driven motion effects, and toast notifications, and demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/skillforge-landing/0.3.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod telemetry;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
