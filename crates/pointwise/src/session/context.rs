//! Session record shared by the state handlers.

use std::fmt;

use serde::Serialize;

use crate::ops::{ClosestPair, DistanceTriple};
use crate::point::{Point, PointList};

/// Operations offered by the process state, keyed by menu code `1..=9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Scale,
    FilterQuadrant,
    TotalVector,
    Sort,
    Pipeline,
    PairwiseDistances,
    ClosestForEach,
    TotalPathDistance,
    FilterDistance,
}

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Scale,
        Operation::FilterQuadrant,
        Operation::TotalVector,
        Operation::Sort,
        Operation::Pipeline,
        Operation::PairwiseDistances,
        Operation::ClosestForEach,
        Operation::TotalPathDistance,
        Operation::FilterDistance,
    ];

    pub fn code(self) -> u8 {
        match self {
            Operation::Scale => 1,
            Operation::FilterQuadrant => 2,
            Operation::TotalVector => 3,
            Operation::Sort => 4,
            Operation::Pipeline => 5,
            Operation::PairwiseDistances => 6,
            Operation::ClosestForEach => 7,
            Operation::TotalPathDistance => 8,
            Operation::FilterDistance => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }

    /// Method name recorded in the context.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Scale => "scale",
            Operation::FilterQuadrant => "filter_quadrant",
            Operation::TotalVector => "total_vector",
            Operation::Sort => "sort",
            Operation::Pipeline => "pipeline",
            Operation::PairwiseDistances => "all_distances",
            Operation::ClosestForEach => "closest_points",
            Operation::TotalPathDistance => "total_distance",
            Operation::FilterDistance => "filter_distance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Scale => "Scale points",
            Operation::FilterQuadrant => "Filter by quadrant",
            Operation::TotalVector => "Total vector",
            Operation::Sort => "Sort points",
            Operation::Pipeline => "Shift-then-scale pipeline",
            Operation::PairwiseDistances => "All pairwise distances",
            Operation::ClosestForEach => "Closest point for each point",
            Operation::TotalPathDistance => "Total path length",
            Operation::FilterDistance => "Filter by distance to a point",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of the last operation, one variant per result shape.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OpOutput {
    Points(Vec<Point>),
    Vector(Point),
    Scalar(f64),
    Distances(Vec<DistanceTriple>),
    ClosestPairs(Vec<ClosestPair>),
}

impl fmt::Display for OpOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpOutput::Points(points) => write!(f, "{}", PointList(points)),
            OpOutput::Vector(v) => write!(f, "{v}"),
            OpOutput::Scalar(s) => write!(f, "{s:.2}"),
            OpOutput::Distances(rows) => {
                for (i, t) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  {} -> {}: {:.2}", t.a, t.b, t.distance)?;
                }
                Ok(())
            }
            OpOutput::ClosestPairs(rows) => {
                for (i, c) in rows.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "  {} -> {}", c.target, c.nearest)?;
                }
                Ok(())
            }
        }
    }
}

/// Points entered so far plus the last operation and its output.
///
/// `method` and `result` are written together, and only after an operation
/// succeeded.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    pub points: Vec<Point>,
    pub method: Option<Operation>,
    pub result: Option<OpOutput>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn has_points(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn record(&mut self, method: Operation, result: OpOutput) {
        self.method = Some(method);
        self.result = Some(result);
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.method = None;
        self.result = None;
    }
}
