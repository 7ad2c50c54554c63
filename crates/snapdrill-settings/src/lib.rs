//! snapdrill Settings Crate
//!
//! Handles configuration files and their validation.

pub mod config;
pub mod error;

pub use config::{Config, ConfigFormat, ConfigOverrides, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
