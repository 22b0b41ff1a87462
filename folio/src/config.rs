//! Folio configuration

use folio_carousel::GestureConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Preference file settings
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Carousel defaults
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FolioConfig {
    /// Load configuration from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Failed to parse config {}: {}", path.display(), e);
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
            }
        }

        Self::default()
    }

    /// Default configuration file location
    pub fn default_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

/// Where the theme preference lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Preference file path
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: default_preferences_path(),
        }
    }
}

/// Carousel defaults for the `carousel` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Travel (display units) before a touch counts as moved
    #[serde(default = "default_move_threshold")]
    pub move_threshold: f32,

    /// Travel (display units) a release must exceed to change slides
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold: f32,

    /// Prefix for slide descriptions
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            move_threshold: default_move_threshold(),
            swipe_threshold: default_swipe_threshold(),
            label_prefix: default_label_prefix(),
        }
    }
}

impl CarouselConfig {
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            move_threshold: self.move_threshold,
            swipe_threshold: self.swipe_threshold,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_preferences_path() -> PathBuf {
    folio_theme::FilePreferences::default_path()
}

fn default_move_threshold() -> f32 {
    GestureConfig::default().move_threshold
}

fn default_swipe_threshold() -> f32 {
    GestureConfig::default().swipe_threshold
}

fn default_label_prefix() -> String {
    folio_carousel::DEFAULT_LABEL_PREFIX.to_string()
}

fn default_log_filter() -> String {
    "folio=info".to_string()
}
