//! Program header and footer
//!
//! The header is the metadata block Snapmaker Luban reads before loading a
//! CNC file, followed by the motion prologue. The metadata values are fixed
//! literals copied from a Luban generated A350 file and are not derived from
//! the job; keep them byte-identical so Luban accepts the file.

use crate::error::CamToolResult;
use crate::format::format_scalar;
use crate::preview::thumbnail_uri;

/// Fixed `;key: value` metadata lines, in file order
pub const HEADER_METADATA: &[(&str, &str)] = &[
    ("header_type", "cnc"),
    ("tool_head", "standardCNCToolheadForSM2"),
    ("machine", "A350"),
    ("renderMethod", "line"),
    ("file_total_lines", "24557"),
    ("estimated_time(s)", "6908.736"),
    ("is_rotate", "false"),
    ("diameter", "35"),
    ("max_x(mm)", "133.31"),
    ("max_y(mm)", "174.997"),
    ("max_z(mm)", "80"),
    ("max_b(mm)", "0"),
    ("min_x(mm)", "-133.313"),
    ("min_y(mm)", "-175"),
    ("min_b(mm)", "0"),
    ("min_z(mm)", "-2"),
    ("work_speed(mm/minute)", "300"),
    ("jog_speed(mm/minute)", "1500"),
    ("power(%)", "0"),
    ("work_size_x", "320"),
    ("work_size_y", "350"),
    ("origin", "center"),
];

/// Feed rate of the final retract in the footer (mm/min)
pub const FOOTER_RETRACT_FEED: u32 = 30000;

/// Build the metadata block and motion prologue.
///
/// Ends with absolute positioning (`G90`), millimeter units (`G21`) and the
/// spindle started at `spindle_power`. Z is not moved here.
pub fn build_header(spindle_power: u32, diameter: f64) -> CamToolResult<String> {
    let mut gcode = String::new();

    gcode.push_str(";Header Start\n");
    for (key, value) in HEADER_METADATA {
        gcode.push_str(&format!(";{}: {}\n", key, value));
    }
    gcode.push_str(&format!(";thumbnail: {}\n", thumbnail_uri(diameter)?));
    gcode.push_str(";Header End\n");
    gcode.push('\n');

    gcode.push_str("; G-code for laser engraving\n");
    gcode.push_str("; Generated by Snapmaker Luban\n");
    gcode.push_str("; G-code START <<<\n");
    gcode.push_str("G90\n");
    gcode.push_str("G21\n");
    gcode.push_str(&format!("M3 P{}\n", spindle_power));

    Ok(gcode)
}

/// Build the epilogue: retract to `safe_height`, stop the spindle, end.
pub fn build_footer(safe_height: f64) -> String {
    let mut gcode = String::new();

    gcode.push('\n');
    gcode.push_str("; stop spindle\n");
    gcode.push('\n');
    gcode.push_str("; go to safe height\n");
    gcode.push_str(&format!(
        "G1 Z{} F{}\n",
        format_scalar(safe_height),
        FOOTER_RETRACT_FEED
    ));
    gcode.push_str("; program ends\n");
    gcode.push_str("M5\n");
    gcode.push_str("M2\n");

    gcode
}
