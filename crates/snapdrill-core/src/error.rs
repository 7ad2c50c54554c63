//! Error handling for snapdrill
//!
//! Provides the error types shared by every layer of the encoder:
//! - Job errors (malformed input from the upstream parser)
//! - Config errors (encoder settings that cannot produce a valid program)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Job error type
///
/// Raised when a drilling job cannot be encoded into a well-formed program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JobError {
    /// Tool diameter is zero, negative, NaN or infinite
    #[error("Invalid tool diameter: {diameter}")]
    InvalidDiameter {
        /// The offending diameter.
        diameter: f64,
    },

    /// A hole coordinate is NaN or infinite
    #[error("Non-finite coordinate in segment {segment}, hole {hole}: ({x}, {y})")]
    NonFiniteCoordinate {
        /// Index of the segment within the job.
        segment: usize,
        /// Index of the hole within the segment.
        hole: usize,
        /// X coordinate as read.
        x: f64,
        /// Y coordinate as read.
        y: f64,
    },
}

/// Encoder configuration error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Drill depth must be a finite, non-negative magnitude
    #[error("Drill depth must be a non-negative magnitude, got {depth}")]
    InvalidDrillDepth {
        /// The rejected depth.
        depth: f64,
    },

    /// Safe height must be finite
    #[error("Safe height must be finite, got {height}")]
    InvalidSafeHeight {
        /// The rejected height.
        height: f64,
    },
}

/// Main error type for snapdrill core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Job error
    #[error(transparent)]
    Job(#[from] JobError),

    /// Config error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Check if this is a job error
    pub fn is_job_error(&self) -> bool {
        matches!(self, Error::Job(_))
    }

    /// Check if this is a config error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_error_display() {
        let err = JobError::InvalidDiameter { diameter: -1.0 };
        assert_eq!(err.to_string(), "Invalid tool diameter: -1");

        let err = JobError::NonFiniteCoordinate {
            segment: 2,
            hole: 5,
            x: f64::NAN,
            y: 1.5,
        };
        assert_eq!(
            err.to_string(),
            "Non-finite coordinate in segment 2, hole 5: (NaN, 1.5)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDrillDepth { depth: -2.0 };
        assert_eq!(
            err.to_string(),
            "Drill depth must be a non-negative magnitude, got -2"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = JobError::InvalidDiameter { diameter: 0.0 }.into();
        assert!(err.is_job_error());
        assert!(!err.is_config_error());

        let err: Error = ConfigError::InvalidSafeHeight {
            height: f64::INFINITY,
        }
        .into();
        assert!(err.is_config_error());
        assert_eq!(err.to_string(), "Safe height must be finite, got inf");
    }
}
