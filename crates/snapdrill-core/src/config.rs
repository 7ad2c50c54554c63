//! Encoder configuration
//!
//! The handful of scalar settings that parameterize a generated program.
//! A config is built once and never mutated while an encoder holds it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default spindle power level passed to `M3 P`
pub const DEFAULT_SPINDLE_POWER: u32 = 100;

/// Default Z height considered clear of the workpiece (mm)
pub const DEFAULT_SAFE_HEIGHT: f64 = 25.0;

/// Default plunge depth below the surface (mm)
pub const DEFAULT_DRILL_DEPTH: f64 = 2.0;

/// Settings for the G-code encoder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Spindle power level (percent)
    pub spindle_power: u32,
    /// Height for safe travel between holes (mm)
    pub safe_height: f64,
    /// Plunge depth as a positive magnitude below Z0 (mm)
    pub drill_depth: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            spindle_power: DEFAULT_SPINDLE_POWER,
            safe_height: DEFAULT_SAFE_HEIGHT,
            drill_depth: DEFAULT_DRILL_DEPTH,
        }
    }
}

impl EncoderConfig {
    /// Create a config from explicit values
    pub fn new(spindle_power: u32, safe_height: f64, drill_depth: f64) -> Self {
        Self {
            spindle_power,
            safe_height,
            drill_depth,
        }
    }

    /// Builder-style setter for the spindle power
    pub fn with_spindle_power(mut self, spindle_power: u32) -> Self {
        self.spindle_power = spindle_power;
        self
    }

    /// Builder-style setter for the safe height
    pub fn with_safe_height(mut self, safe_height: f64) -> Self {
        self.safe_height = safe_height;
        self
    }

    /// Builder-style setter for the drill depth
    pub fn with_drill_depth(mut self, drill_depth: f64) -> Self {
        self.drill_depth = drill_depth;
        self
    }

    /// Check the settings produce a well-formed program
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.drill_depth.is_finite() || self.drill_depth < 0.0 {
            return Err(ConfigError::InvalidDrillDepth {
                depth: self.drill_depth,
            });
        }

        if !self.safe_height.is_finite() {
            return Err(ConfigError::InvalidSafeHeight {
                height: self.safe_height,
            });
        }

        Ok(())
    }
}
