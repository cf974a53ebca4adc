// SPDX-License-Identifier: MPL-2.0
//! Light and dark color schemes and the persisted theme mode.
//!
//! The navbar toggle cycles [`ThemeMode`]; [`AppTheme`] resolves the mode to
//! a concrete [`ColorScheme`] once, at construction, so views read plain
//! colors instead of re-detecting the system theme every frame.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// The resolved colors the views paint with.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// Page background.
    pub surface_primary: Color,
    /// Panels and cards.
    pub surface_secondary: Color,
    /// Hairlines and outlines.
    pub surface_tertiary: Color,
    /// Headings and body copy.
    pub text_primary: Color,
    /// Supporting copy.
    pub text_secondary: Color,
    /// Muted copy, like the footer copyright line.
    pub text_tertiary: Color,
    /// First stop of the brand gradient, doubling as the interactive accent.
    pub brand_primary: Color,
    /// Second stop of the brand gradient.
    pub brand_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,
            surface_tertiary: palette::GRAY_200,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_400,
            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::ACCENT_500,
        }
    }

    /// Dark surfaces keep a slight indigo tint rather than a flat gray, and
    /// the brand stops step one shade lighter to hold contrast.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.14, 0.14, 0.17),
            surface_tertiary: Color::from_rgb(0.19, 0.19, 0.23),
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,
            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::ACCENT_400,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            // Dark is the fallback when detection fails.
            Self::dark()
        }
    }
}

/// The active scheme together with the mode that produced it.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

/// User-selectable theme preference, persisted in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark, consulting the OS for `System`.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Advances to the next mode in the navbar toggle order.
    #[must_use]
    pub fn cycle(self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// The i18n key for the toggle label shown in the navbar.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "navbar-theme-light",
            ThemeMode::Dark => "navbar-theme-dark",
            ThemeMode::System => "navbar-theme-system",
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}
