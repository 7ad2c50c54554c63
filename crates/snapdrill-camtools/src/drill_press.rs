//! Per-hole drilling motion
//!
//! Every hole is drilled with the same three moves:
//! 1. travel to `(x, y)` at the current Z
//! 2. plunge to `-drill_depth`
//! 3. retract to `safe_height`
//!
//! The travel move carries no Z word. It relies on the tool already being at
//! `safe_height`, which the retract of the previous hole guarantees. Before
//! the first hole the header does not move Z, so the operator must start the
//! program with the tool clear of the workpiece.

use snapdrill_core::EncoderConfig;

use crate::error::CamToolResult;
use crate::format::{format_coordinate, format_scalar};

/// Feed rate for the travel and retract moves (mm/min)
pub const TRAVEL_FEED: u32 = 300;
/// Feed rate for the plunge (mm/min)
pub const PLUNGE_FEED: u32 = 100;

/// Generate the travel, plunge and retract lines for one hole.
///
/// `drill_depth` is a non-negative magnitude; the plunge target is its
/// negation. The Z parameters go through [`EncoderConfig::validate`], so a
/// negative or non-finite depth or a non-finite safe height is rejected with
/// the same error the writer reports.
pub fn drill_sequence(x: f64, y: f64, safe_height: f64, drill_depth: f64) -> CamToolResult<String> {
    EncoderConfig::default()
        .with_safe_height(safe_height)
        .with_drill_depth(drill_depth)
        .validate()?;

    let mut gcode = String::new();
    push_drill_sequence(&mut gcode, x, y, safe_height, drill_depth);
    Ok(gcode)
}

/// Append one drill sequence to `gcode`.
///
/// Parameters must already have passed [`EncoderConfig::validate`].
pub(crate) fn push_drill_sequence(
    gcode: &mut String,
    x: f64,
    y: f64,
    safe_height: f64,
    drill_depth: f64,
) {
    gcode.push_str(&format!(
        "G1 F{} X{} Y{}\n",
        TRAVEL_FEED,
        format_coordinate(x),
        format_coordinate(y)
    ));
    gcode.push_str(&format!(
        "G1 F{} Z-{}\n",
        PLUNGE_FEED,
        format_scalar(drill_depth)
    ));
    gcode.push_str(&format!(
        "G1 F{} Z{}\n",
        TRAVEL_FEED,
        format_scalar(safe_height)
    ));
}
