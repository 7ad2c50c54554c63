//! Data models for drilling jobs
//!
//! This module provides:
//! - Hole coordinates in the machine frame (millimeters, origin at table center)
//! - Segments, the ordered groups of holes produced by the upstream parser
//! - Tool jobs, all segments drilled with one tool diameter
//! - Drill jobs, the full set of tool jobs read from one source file
//!
//! Ordering is meaningful everywhere: the order of segments and of holes
//! within a segment is the physical tool path order.

pub mod job;

pub use job::{DrillJob, Hole, Segment, ToolJob};
