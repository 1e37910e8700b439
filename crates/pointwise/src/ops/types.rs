//! Parameter and result types of the point operations.
//!
//! - `Quadrant`: closed set of the four quadrants with the `>= 0` axis rule.
//! - `SortCriteria`: the sort keys accepted by `sort_by_criteria`.
//! - `DistanceTriple`, `ClosestPair`: derived rows of the distance queries.
//! - `Stage`: boxed point map used as one step of a pipeline.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PointsError;
use crate::point::Point;

/// One step of `transform_pipeline`.
pub type Stage = Box<dyn Fn(Point) -> Point>;

/// Quadrant of the plane.
///
/// Points on an axis belong to the side tested with `>= 0`: the non-negative
/// x half goes to quadrants 1 and 4, the non-negative y half to quadrants 1
/// and 2. Every finite point lies in exactly one quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        match self {
            Quadrant::First => p.x >= 0.0 && p.y >= 0.0,
            Quadrant::Second => p.x < 0.0 && p.y >= 0.0,
            Quadrant::Third => p.x < 0.0 && p.y < 0.0,
            Quadrant::Fourth => p.x >= 0.0 && p.y < 0.0,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Quadrant::First => 1,
            Quadrant::Second => 2,
            Quadrant::Third => 3,
            Quadrant::Fourth => 4,
        }
    }
}

impl TryFrom<i64> for Quadrant {
    type Error = PointsError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Quadrant::First),
            2 => Ok(Quadrant::Second),
            3 => Ok(Quadrant::Third),
            4 => Ok(Quadrant::Fourth),
            _ => Err(PointsError::invalid(format!(
                "quadrant must be between 1 and 4, got {n}"
            ))),
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Sort keys for `sort_by_criteria`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortCriteria {
    /// Euclidean norm.
    DistanceToOrigin,
    XThenY,
    YThenX,
    /// `x + y`.
    SumCoordinates,
}

impl SortCriteria {
    pub const ALL: [SortCriteria; 4] = [
        SortCriteria::DistanceToOrigin,
        SortCriteria::XThenY,
        SortCriteria::YThenX,
        SortCriteria::SumCoordinates,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortCriteria::DistanceToOrigin => "distance_to_origin",
            SortCriteria::XThenY => "x_then_y",
            SortCriteria::YThenX => "y_then_x",
            SortCriteria::SumCoordinates => "sum_coordinates",
        }
    }

    /// Total order over keys, so sorting never panics on NaN. Signed zeros
    /// compare equal.
    pub fn compare(self, a: &Point, b: &Point) -> Ordering {
        match self {
            SortCriteria::DistanceToOrigin => key_cmp(a.norm(), b.norm()),
            SortCriteria::XThenY => key_cmp(a.x, b.x).then(key_cmp(a.y, b.y)),
            SortCriteria::YThenX => key_cmp(a.y, b.y).then(key_cmp(a.x, b.x)),
            SortCriteria::SumCoordinates => key_cmp(a.x + a.y, b.x + b.y),
        }
    }
}

/// `total_cmp` with `-0.0` folded onto `+0.0`.
#[inline]
fn key_cmp(a: f64, b: f64) -> Ordering {
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl FromStr for SortCriteria {
    type Err = PointsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| PointsError::invalid(format!("unknown sort criteria '{name}'")))
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Distance between the unordered pair `(a, b)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DistanceTriple {
    pub a: Point,
    pub b: Point,
    pub distance: f64,
}

/// Nearest other point of `target`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClosestPair {
    pub target: Point,
    pub nearest: Point,
}
