//! # snapdrill Core
//!
//! Core types and utilities for snapdrill.
//! Provides the drilling job model consumed by the encoder, the encoder
//! configuration, and the shared error types.

pub mod config;
pub mod data;
pub mod error;

pub use config::{EncoderConfig, DEFAULT_DRILL_DEPTH, DEFAULT_SAFE_HEIGHT, DEFAULT_SPINDLE_POWER};

pub use data::{DrillJob, Hole, Segment, ToolJob};

pub use error::{ConfigError, Error, JobError, Result};
