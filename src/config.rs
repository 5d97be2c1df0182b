//! Application configuration.
//!
//! Startup settings are read from a TOML file in the platform config
//! directory. The file only configures the presentation; accessibility
//! preferences are never written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::preferences::DEFAULT_STEP;
use crate::ui::theme::WidgetVariant;

/// Tracing filter used until the config is loaded, and by default after.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial window width in points
    pub window_width: f32,
    /// Initial window height in points
    pub window_height: f32,
    /// Cosmetic variant of the overlay widget
    pub variant: WidgetVariant,
    /// Step applied by the +/- buttons, in percent
    pub numeric_step: i32,
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 800.0,
            variant: WidgetVariant::default(),
            numeric_step: DEFAULT_STEP,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Check values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.numeric_step <= 0 {
            return Err(ConfigError::InvalidValue(format!(
                "numeric_step must be positive, got {}",
                self.numeric_step
            )));
        }
        if !(self.window_width >= 320.0 && self.window_height >= 240.0) {
            return Err(ConfigError::InvalidValue(format!(
                "window must be at least 320x240, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }
}

/// Get the application config directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "a11yoverlay", "A11yOverlay")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from a file. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    config.validate()?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
