//! Configuration file handling for snapdrill
//!
//! Supports JSON and TOML files. Without an explicit path the per-user file
//! `<config_dir>/snapdrill/config.toml` is used when it exists, otherwise
//! built-in defaults apply.
//!
//! Configuration is organized into sections:
//! - Encoder settings (spindle power, safe height, drill depth)
//! - Output preferences (default output directory)

use serde::{Deserialize, Serialize};
use snapdrill_core::EncoderConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "snapdrill";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON file (`.json`)
    Json,
    /// TOML file (`.toml`)
    Toml,
}

impl ConfigFormat {
    /// Determine the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Output preference settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Directory for generated programs when no output name is given.
    /// `None` writes next to the input file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Per-run values that take precedence over the file
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces `encoder.spindle_power` when set
    pub spindle_power: Option<u32>,

    /// Replaces `encoder.safe_height` when set (mm)
    pub safe_height: Option<f64>,

    /// Replaces `encoder.drill_depth` when set (mm, positive magnitude)
    pub drill_depth: Option<f64>,
}

/// Complete snapdrill configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// G-code encoder settings
    pub encoder: EncoderConfig,
    /// Output preferences
    pub output: OutputSettings,
}

impl Config {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-user configuration file path, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, or from the per-user file when `path` is `None`.
    ///
    /// A missing per-user file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => self.to_toml()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Render configuration as TOML
    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        self.encoder.validate()?;
        Ok(())
    }

    /// Apply per-run overrides on top of the loaded values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(spindle_power) = overrides.spindle_power {
            self.encoder.spindle_power = spindle_power;
        }
        if let Some(safe_height) = overrides.safe_height {
            self.encoder.safe_height = safe_height;
        }
        if let Some(drill_depth) = overrides.drill_depth {
            self.encoder.drill_depth = drill_depth;
        }
    }
}
