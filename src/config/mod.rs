// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use skillforge_landing::config;
//! use skillforge_landing::ui::theming::ThemeMode;
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.theme_mode = ThemeMode::Dark;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific directory (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! config::save_to_dir(&config, &temp_dir).expect("Failed to save to dir");
//! let loaded_config = config::load_from_dir(&temp_dir).expect("Failed to load from dir");
//! assert_eq!(loaded_config.theme_mode, ThemeMode::Dark);
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SkillForge";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Whether the welcome notification fires shortly after startup.
    #[serde(default)]
    pub welcome_toast: Option<bool>,
    /// Accessibility switch that skips decorative motion (parallax, ripples,
    /// entrance slides, eased scrolling). Content still appears and toasts
    /// keep their timing; only the movement is dropped.
    #[serde(default)]
    pub reduced_motion: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::System,
            welcome_toast: Some(true),
            reduced_motion: None,
        }
    }
}

impl Config {
    /// Resolves the welcome-toast preference, defaulting to enabled.
    pub fn welcome_toast_enabled(&self) -> bool {
        self.welcome_toast.unwrap_or(true)
    }

    /// Resolves the reduced-motion preference, defaulting to full motion.
    pub fn reduced_motion_enabled(&self) -> bool {
        self.reduced_motion.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads `settings.toml` from a specific directory (the `--config-dir`
/// override); a missing file yields the defaults like [`load`] does.
pub fn load_from_dir(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return load_from_path(&path);
    }
    Ok(Config::default())
}

/// Saves `settings.toml` into a specific directory.
pub fn save_to_dir(config: &Config, dir: &Path) -> Result<()> {
    save_to_path(config, &dir.join(CONFIG_FILE))
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
