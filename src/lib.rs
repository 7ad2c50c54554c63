//! # snapdrill
//!
//! Converts parsed drilling jobs into G-code programs for the Snapmaker A350
//! CNC tool head.
//!
//! ## Architecture
//!
//! snapdrill is organized as a workspace with multiple crates:
//!
//! 1. **snapdrill-core** - Job model, encoder configuration, error types
//! 2. **snapdrill-camtools** - Header/footer templates, preview, drill sequences, writer
//! 3. **snapdrill-settings** - Configuration files (JSON/TOML)
//! 4. **snapdrill** - Command line binary that integrates all crates

use anyhow::Context;
use std::path::Path;

pub mod cli;

pub use snapdrill_camtools::{
    build_footer, build_header, drill_sequence, render_preview, CamToolError, GcodeWriter,
};
pub use snapdrill_core::{DrillJob, EncoderConfig, Hole, JobError, Segment, ToolJob};
pub use snapdrill_settings::{Config, ConfigOverrides, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Read a drill job from a JSON file.
///
/// Accepts an array of tool jobs, a single tool job object, or an object with
/// a `tools` array.
pub fn load_drill_job(path: &Path) -> anyhow::Result<DrillJob> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;
    let job: DrillJob = serde_json::from_str(&content)
        .with_context(|| format!("Invalid job file {}", path.display()))?;

    tracing::debug!(
        "Loaded {} tool jobs with {} holes from {}",
        job.tools.len(),
        job.hole_count(),
        path.display()
    );
    Ok(job)
}

/// Log filter for a verbosity level and an optional `RUST_LOG` value.
///
/// `RUST_LOG` sets the levels when no `-v` is given, falling back to `info`.
/// Each `-v` raises the global level (debug, then trace) on top of it.
pub fn log_filter(verbosity: u8, rust_log: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(rust_log.unwrap_or_default());

    match verbosity {
        0 => filter,
        1 => filter.add_directive(LevelFilter::DEBUG.into()),
        _ => filter.add_directive(LevelFilter::TRACE.into()),
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for generated programs
/// - RUST_LOG environment variable support
/// - Verbosity raised by each `-v` flag (info, debug, trace)
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = log_filter(verbosity, rust_log.as_deref());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbosity > 0)
        .with_level(true)
        .with_line_number(verbosity > 1);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}
