//! Error types for the CAM tools crate.
//!
//! This module provides structured error types for G-code encoding,
//! job and settings validation, and output sink handling.

use snapdrill_core::{ConfigError, JobError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// The output destination could not be created, written or moved into place.
    #[error("Cannot write {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Image processing failed.
    #[error("Image processing error: {0}")]
    ImageError(String),

    /// The job cannot be encoded.
    #[error("Malformed job: {0}")]
    Job(#[from] JobError),

    /// The encoder configuration is invalid.
    #[error("Invalid encoder configuration: {0}")]
    Config(#[from] ConfigError),

    /// I/O error while streaming to a caller-supplied writer.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl CamToolError {
    /// True when the failure came from the output destination
    pub fn is_sink_error(&self) -> bool {
        matches!(self, Self::SinkUnavailable { .. } | Self::IoError(_))
    }
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;
