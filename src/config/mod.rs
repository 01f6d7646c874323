// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Gallery modal settings (fallback title, timeout, thumbnails, cache)
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`load_with_override`] (`--config-dir`)
//! 2. `CAD_FOLIO_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! Settings are read-only at runtime: the theme toggle is session-scoped and
//! nothing is written back.
//!
//! # Examples
//!
//! ```no_run
//! use cad_folio::config;
//!
//! let (config, _warning) = config::load_with_override(None);
//! println!("fallback title: {}", config.gallery.fallback_title());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "CadFolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CAD_FOLIO_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Initial theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Gallery modal settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Title shown when the design card has no heading.
    #[serde(default)]
    pub fallback_title: Option<String>,

    /// Seconds before a pending image is reported as failed.
    #[serde(default)]
    pub loading_timeout_secs: Option<u32>,

    /// Thumbnail edge length in logical pixels.
    #[serde(default)]
    pub thumbnail_size: Option<f32>,

    /// Maximum number of decoded images kept in memory.
    #[serde(default)]
    pub cache_max_images: Option<usize>,

    /// Maximum size of the decoded image cache in megabytes.
    #[serde(default)]
    pub cache_max_mb: Option<u32>,
}

impl GalleryConfig {
    /// Fallback title, ignoring blank values.
    #[must_use]
    pub fn fallback_title(&self) -> &str {
        self.fallback_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_GALLERY_TITLE)
    }

    /// Loading timeout clamped to the supported range.
    #[must_use]
    pub fn loading_timeout(&self) -> Duration {
        let secs = self
            .loading_timeout_secs
            .unwrap_or(DEFAULT_LOADING_TIMEOUT_SECS)
            .clamp(MIN_LOADING_TIMEOUT_SECS, MAX_LOADING_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Thumbnail size clamped to the supported range.
    #[must_use]
    pub fn thumbnail_size(&self) -> f32 {
        self.thumbnail_size
            .filter(|size| size.is_finite())
            .unwrap_or(DEFAULT_THUMBNAIL_SIZE)
            .clamp(MIN_THUMBNAIL_SIZE, MAX_THUMBNAIL_SIZE)
    }

    /// Cache entry limit clamped to the supported range.
    #[must_use]
    pub fn cache_max_images(&self) -> usize {
        self.cache_max_images
            .unwrap_or(DEFAULT_CACHE_MAX_IMAGES)
            .clamp(MIN_CACHE_MAX_IMAGES, MAX_CACHE_MAX_IMAGES)
    }

    /// Cache byte limit clamped to the supported range.
    #[must_use]
    pub fn cache_max_bytes(&self) -> usize {
        let mb = self
            .cache_max_mb
            .unwrap_or(DEFAULT_CACHE_MAX_MB)
            .clamp(MIN_CACHE_MAX_MB, MAX_CACHE_MAX_MB);
        mb as usize * 1024 * 1024
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery modal settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override and the environment.
fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        if !dir.is_empty() {
            return Some(PathBuf::from(dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from an optional custom directory.
///
/// Returns a tuple of (config, optional_warning_key). A missing file is not a
/// problem; an unreadable or invalid one falls back to defaults and reports
/// an i18n key the caller can surface to the user.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(dir) = config_dir_with_override(base_dir) {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    log::debug!("loaded settings from {}", path.display());
                    return (config, None);
                }
                Err(err) => {
                    log::warn!("ignoring settings at {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
