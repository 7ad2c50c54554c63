//! Command line interface

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use snapdrill_camtools::GcodeWriter;
use snapdrill_settings::{Config, ConfigOverrides};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::load_drill_job;

#[derive(Parser, Debug)]
#[command(name = "snapdrill")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
#[command(about = "Convert drilling jobs into Snapmaker CNC programs", long_about = None)]
pub struct Cli {
    /// Drill job JSON file
    #[arg(required_unless_present = "print_config")]
    pub input: Option<PathBuf>,

    /// Output name; programs are written to <OUTPUT>_<diameter>.cnc
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (.json or .toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Spindle power level for M3
    #[arg(long)]
    pub spindle_power: Option<u32>,

    /// Z height for travel between holes (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub safe_height: Option<f64>,

    /// Plunge depth below the surface as a positive magnitude (mm)
    #[arg(long, allow_negative_numbers = true)]
    pub drill_depth: Option<f64>,

    /// Print programs to stdout instead of writing files
    #[arg(long)]
    pub stdout: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Increase log verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings given on the command line
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            spindle_power: self.spindle_power,
            safe_height: self.safe_height,
            drill_depth: self.drill_depth,
        }
    }

    /// Base name the diameter suffix is appended to
    pub fn sink_name(&self, input: &Path, config: &Config) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }

        let stem = input.with_extension("");
        match (&config.output.directory, stem.file_name()) {
            (Some(dir), Some(name)) => dir.join(name),
            _ => stem,
        }
    }
}

/// Run the command and return the paths of the programs written
pub fn execute(cli: &Cli) -> Result<Vec<PathBuf>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with(cli, &mut out)
}

/// Run the command, sending `--stdout` programs and `--print-config` output
/// to `out`. Returns the paths of the programs written to disk.
pub fn execute_with<W: Write>(cli: &Cli, out: &mut W) -> Result<Vec<PathBuf>> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    config.apply_overrides(&cli.overrides());
    config.validate()?;

    if cli.print_config {
        write!(out, "{}", config.to_toml()?)?;
        out.flush()?;
        return Ok(Vec::new());
    }

    let input = cli.input.as_deref().context("No input file given")?;
    let drill = load_drill_job(input)?;
    let writer = GcodeWriter::new(config.encoder);

    if cli.stdout {
        for job in drill.by_diameter() {
            writer.write_to(&job, out)?;
        }
        out.flush()?;
        return Ok(Vec::new());
    }

    let sink = cli.sink_name(input, &config);
    let paths = writer.write_all(&drill, &sink)?;
    info!("Generated {} programs from {}", paths.len(), input.display());
    Ok(paths)
}
