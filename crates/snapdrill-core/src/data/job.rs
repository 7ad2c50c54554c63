use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::JobError;

/// A single hole center in machine coordinates (mm)
///
/// Serialized as a two element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Hole {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Hole {
    /// Create a new hole at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Hole {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Hole> for [f64; 2] {
    fn from(hole: Hole) -> Self {
        [hole.x, hole.y]
    }
}

impl From<(f64, f64)> for Hole {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An ordered run of holes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Holes in drilling order
    #[serde(default)]
    pub holes: Vec<Hole>,
}

impl Segment {
    /// Create a segment from anything convertible into holes
    pub fn new<I, H>(holes: I) -> Self
    where
        I: IntoIterator<Item = H>,
        H: Into<Hole>,
    {
        Self {
            holes: holes.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of holes in this segment
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// True when the segment has no holes
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

/// All segments drilled with a single tool diameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolJob {
    /// Tool diameter in millimeters
    pub diameter: f64,
    /// Segments in drilling order
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl ToolJob {
    /// Create an empty job for the given tool diameter
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            segments: Vec::new(),
        }
    }

    /// Builder-style helper appending a segment
    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Total number of holes across all segments
    pub fn hole_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    /// Iterate every hole in segment order, then hole order
    pub fn holes(&self) -> impl Iterator<Item = &Hole> + '_ {
        self.segments.iter().flat_map(|segment| segment.holes.iter())
    }

    /// True when the job contains no holes at all
    pub fn is_empty(&self) -> bool {
        self.hole_count() == 0
    }

    /// Check the job can be encoded into a well-formed program.
    ///
    /// Empty jobs are valid; they encode to a header followed by a footer.
    pub fn validate(&self) -> Result<(), JobError> {
        if !self.diameter.is_finite() || self.diameter <= 0.0 {
            return Err(JobError::InvalidDiameter {
                diameter: self.diameter,
            });
        }

        for (segment_index, segment) in self.segments.iter().enumerate() {
            if let Some((hole_index, hole)) = segment
                .holes
                .iter()
                .enumerate()
                .find(|(_, hole)| !hole.is_finite())
            {
                return Err(JobError::NonFiniteCoordinate {
                    segment: segment_index,
                    hole: hole_index,
                    x: hole.x,
                    y: hole.y,
                });
            }
        }

        Ok(())
    }
}

/// Every tool job read from one drill source
///
/// Deserializes from either a JSON array of tool jobs or a single tool job
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DrillJobRepr")]
pub struct DrillJob {
    /// Tool jobs in source order
    pub tools: Vec<ToolJob>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DrillJobRepr {
    Many(Vec<ToolJob>),
    One(ToolJob),
    Wrapped { tools: Vec<ToolJob> },
}

impl From<DrillJobRepr> for DrillJob {
    fn from(repr: DrillJobRepr) -> Self {
        match repr {
            DrillJobRepr::Many(tools) | DrillJobRepr::Wrapped { tools } => Self { tools },
            DrillJobRepr::One(tool) => Self { tools: vec![tool] },
        }
    }
}

impl DrillJob {
    /// Create a drill job from tool jobs
    pub fn new(tools: Vec<ToolJob>) -> Self {
        Self { tools }
    }

    /// Merge tool jobs sharing a diameter.
    ///
    /// The result holds one job per distinct diameter, in order of first
    /// appearance. Segments of merged jobs keep their source order.
    pub fn by_diameter(&self) -> Vec<ToolJob> {
        let mut merged: Vec<ToolJob> = Vec::new();
        for tool in &self.tools {
            match merged.iter_mut().find(|job| job.diameter == tool.diameter) {
                Some(job) => job.segments.extend(tool.segments.iter().cloned()),
                None => merged.push(tool.clone()),
            }
        }
        merged
    }

    /// Total number of holes across every tool
    pub fn hole_count(&self) -> usize {
        self.tools.iter().map(ToolJob::hole_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> ToolJob {
        ToolJob::new(0.8)
            .with_segment(Segment::new([(1.0, 2.0), (3.0, 4.0)]))
            .with_segment(Segment::default())
            .with_segment(Segment::new([(5.0, 6.0)]))
    }

    #[test]
    fn test_hole_iteration_preserves_order() {
        let job = sample_job();
        let holes: Vec<(f64, f64)> = job.holes().map(|h| (h.x, h.y)).collect();
        assert_eq!(holes, vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)]);
        assert_eq!(job.hole_count(), 3);
        assert!(!job.is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_diameter() {
        for diameter in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let job = ToolJob::new(diameter);
            assert!(matches!(
                job.validate(),
                Err(JobError::InvalidDiameter { .. })
            ));
        }
    }

    #[test]
    fn test_validate_reports_hole_position() {
        let job = ToolJob::new(1.0)
            .with_segment(Segment::new([(0.0, 0.0)]))
            .with_segment(Segment::new([(1.0, 1.0), (f64::NAN, 2.0)]));

        match job.validate() {
            Err(JobError::NonFiniteCoordinate { segment, hole, .. }) => {
                assert_eq!(segment, 1);
                assert_eq!(hole, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_job_is_valid() {
        let job = ToolJob::new(35.0);
        assert!(job.validate().is_ok());
        assert!(job.is_empty());
    }

    #[test]
    fn test_by_diameter_merges_in_first_appearance_order() {
        let drill = DrillJob::new(vec![
            ToolJob::new(1.0).with_segment(Segment::new([(1.0, 1.0)])),
            ToolJob::new(0.8).with_segment(Segment::new([(2.0, 2.0)])),
            ToolJob::new(1.0).with_segment(Segment::new([(3.0, 3.0)])),
        ]);

        let merged = drill.by_diameter();
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].diameter, 1.0);
        assert_eq!(merged[1].diameter, 0.8);

        let first: Vec<f64> = merged[0].holes().map(|h| h.x).collect();
        assert_eq!(first, vec![1.0, 3.0]);
        assert_eq!(drill.hole_count(), 3);
    }

    #[test]
    fn test_json_shapes() {
        let json = r#"{"diameter": 35, "segments": [{"holes": [[10.0, 20.0], [-5.0, 3.5]]}]}"#;
        let job: ToolJob = serde_json::from_str(json).unwrap();
        assert_eq!(job.diameter, 35.0);
        assert_eq!(job.segments[0].holes[1], Hole::new(-5.0, 3.5));

        let drill: DrillJob = serde_json::from_str(json).unwrap();
        assert_eq!(drill.tools.len(), 1);

        let drill: DrillJob = serde_json::from_str(&format!("[{json}, {json}]")).unwrap();
        assert_eq!(drill.tools.len(), 2);

        let drill: DrillJob =
            serde_json::from_str(&format!(r#"{{"tools": [{json}]}}"#)).unwrap();
        assert_eq!(drill.tools.len(), 1);
    }

    #[test]
    fn test_hole_serializes_as_pair() {
        let text = serde_json::to_string(&Hole::new(1.5, -2.0)).unwrap();
        assert_eq!(text, "[1.5,-2.0]");
    }
}
