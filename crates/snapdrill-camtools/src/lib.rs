//! # snapdrill CAM Tools
//!
//! This crate encodes drilling jobs into G-code programs for the Snapmaker
//! A350 CNC tool head.
//!
//! ## Components
//!
//! - **Preview**: the blank PNG thumbnail embedded in the program header
//! - **Template**: the fixed metadata header, motion prologue and epilogue
//! - **Drill Press**: the travel/plunge/retract sequence emitted per hole
//! - **Writer**: orchestrates a whole program and writes it to disk
//! - **Format**: numeric rendering rules shared by every G-code word

pub mod drill_press;
pub mod error;
pub mod format;
pub mod preview;
pub mod template;
pub mod writer;

// Re-export commonly used items
pub use drill_press::{drill_sequence, PLUNGE_FEED, TRAVEL_FEED};
pub use error::{CamToolError, CamToolResult};
pub use format::{format_coordinate, format_scalar};
pub use preview::{render_preview, thumbnail_uri, PREVIEW_HEIGHT, PREVIEW_WIDTH};
pub use template::{build_footer, build_header};
pub use writer::GcodeWriter;
