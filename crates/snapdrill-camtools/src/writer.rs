//! Job encoder
//!
//! Turns a [`ToolJob`] into a complete `.cnc` program: header, one drill
//! sequence per hole in job order, footer.

use snapdrill_core::{DrillJob, EncoderConfig, ToolJob};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info, warn};

use crate::drill_press::push_drill_sequence;
use crate::error::{CamToolError, CamToolResult};
use crate::format::format_scalar;
use crate::template::{build_footer, build_header};

/// Extension of generated programs
pub const OUTPUT_EXTENSION: &str = "cnc";

/// Writes drilling jobs as Snapmaker CNC programs
#[derive(Debug, Clone)]
pub struct GcodeWriter {
    config: EncoderConfig,
}

impl Default for GcodeWriter {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

impl GcodeWriter {
    /// Create a new writer with the given settings
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Settings used for every program this writer produces
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Destination for a job: `<sink_name>_<diameter>.cnc`
    pub fn output_path(sink_name: impl AsRef<Path>, diameter: f64) -> PathBuf {
        let mut name = OsString::from(sink_name.as_ref().as_os_str());
        name.push(format!("_{}.{}", format_scalar(diameter), OUTPUT_EXTENSION));
        PathBuf::from(name)
    }

    /// Stream the program for `job` into `out`.
    pub fn write_to<W: Write>(&self, job: &ToolJob, out: &mut W) -> CamToolResult<()> {
        let header = self.prepare(job)?;
        self.stream(job, &header, out)?;
        Ok(())
    }

    /// Encode the program for `job` in memory
    pub fn render(&self, job: &ToolJob) -> CamToolResult<String> {
        let mut buffer = Vec::new();
        self.write_to(job, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| {
            CamToolError::IoError(io::Error::new(io::ErrorKind::InvalidData, e))
        })
    }

    /// Write the program for `job` to `<sink_name>_<diameter>.cnc`.
    ///
    /// The job and settings are validated before the destination is touched.
    /// The program is written to a temporary file next to the destination and
    /// renamed over it once complete, so a failed write leaves no partial
    /// program behind. A new program gets the usual umask-derived mode and an
    /// overwritten one keeps its permissions. Returns the path written.
    pub fn write(&self, job: &ToolJob, sink_name: impl AsRef<Path>) -> CamToolResult<PathBuf> {
        let header = self.prepare(job)?;
        let path = Self::output_path(sink_name, job.diameter);

        let sink_error = |source: io::Error| CamToolError::SinkUnavailable {
            path: path.clone(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let temp = create_temp_file(dir).map_err(sink_error)?;
        let mut out = BufWriter::new(temp);
        self.stream(job, &header, &mut out).map_err(sink_error)?;
        let temp = out
            .into_inner()
            .map_err(|e| sink_error(e.into_error()))?;
        if let Ok(existing) = fs::metadata(&path) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(sink_error)?;
        }
        temp.as_file().sync_all().map_err(sink_error)?;
        temp.persist(&path).map_err(|e| sink_error(e.error))?;

        info!(
            "Wrote {} holes at diameter {} to {}",
            job.hole_count(),
            job.diameter,
            path.display()
        );
        Ok(path)
    }

    /// Write one program per distinct tool diameter in `drill`.
    ///
    /// Stops at the first failure; programs already written are kept.
    pub fn write_all(
        &self,
        drill: &DrillJob,
        sink_name: impl AsRef<Path>,
    ) -> CamToolResult<Vec<PathBuf>> {
        let sink_name = sink_name.as_ref();
        drill
            .by_diameter()
            .iter()
            .map(|job| self.write(job, sink_name))
            .collect()
    }

    /// Validate inputs and build the header
    fn prepare(&self, job: &ToolJob) -> CamToolResult<String> {
        self.config.validate()?;
        job.validate()?;

        if job.is_empty() {
            warn!("Tool job at diameter {} has no holes", job.diameter);
        }

        build_header(self.config.spindle_power, job.diameter)
    }

    fn stream<W: Write>(&self, job: &ToolJob, header: &str, out: &mut W) -> io::Result<()> {
        out.write_all(header.as_bytes())?;

        let mut block = String::new();
        for (index, segment) in job.segments.iter().enumerate() {
            debug!("Segment {}: {} holes", index, segment.len());
            for hole in &segment.holes {
                block.clear();
                push_drill_sequence(
                    &mut block,
                    hole.x,
                    hole.y,
                    self.config.safe_height,
                    self.config.drill_depth,
                );
                out.write_all(block.as_bytes())?;
            }
        }

        out.write_all(build_footer(self.config.safe_height).as_bytes())?;
        out.flush()
    }
}

/// Temporary program file in `dir`, created with the mode a plain
/// `File::create` would give (0o666 filtered by the process umask).
fn create_temp_file(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".snapdrill-").suffix(".tmp");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}
