// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use geodrop::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.navbar.download_url = "https://example.com/app".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GeoDrop";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub composer: ComposerConfig,
    #[serde(default)]
    pub navbar: NavbarConfig,
    #[serde(default)]
    pub location: LocationConfig,
}

/// Map view tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
    #[serde(default = "default_fallback_zoom")]
    pub zoom: u8,
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: defaults::FALLBACK_LATITUDE,
            fallback_longitude: defaults::FALLBACK_LONGITUDE,
            zoom: defaults::FALLBACK_ZOOM,
            focus_zoom: defaults::FOCUS_ZOOM,
        }
    }
}

/// Composer tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposerConfig {
    /// Simulated submission delay in milliseconds.
    #[serde(default = "default_post_delay_ms")]
    pub post_delay_ms: u64,
    /// Force capture opens to fail with a permission error. Useful for
    /// demonstrating the denial flow without real hardware prompts.
    #[serde(default)]
    pub deny_capture: bool,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            post_delay_ms: defaults::POST_DELAY_MS,
            deny_capture: false,
        }
    }
}

/// Navbar tunables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavbarConfig {
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            download_url: defaults::DOWNLOAD_URL.to_string(),
        }
    }
}

/// Optional static position source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

fn default_fallback_latitude() -> f64 {
    defaults::FALLBACK_LATITUDE
}

fn default_fallback_longitude() -> f64 {
    defaults::FALLBACK_LONGITUDE
}

fn default_fallback_zoom() -> u8 {
    defaults::FALLBACK_ZOOM
}

fn default_focus_zoom() -> u8 {
    defaults::FOCUS_ZOOM
}

fn default_post_delay_ms() -> u64 {
    defaults::POST_DELAY_MS
}

fn default_download_url() -> String {
    defaults::DOWNLOAD_URL.to_string()
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Resolves the config file path, honoring an explicit directory override.
fn config_path_with_override(config_dir: Option<&str>) -> Option<PathBuf> {
    match config_dir {
        Some(dir) => Some(Path::new(dir).join(CONFIG_FILE)),
        None => get_default_config_path(),
    }
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

/// Loads the config from `config_dir` when given, the platform default
/// location otherwise. A missing file yields defaults.
pub fn load_with_dir(config_dir: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path_with_override(config_dir) {
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
