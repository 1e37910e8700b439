//! Fixed showcase sequence over a point set.
//!
//! Runs scale ×2, first-quadrant filter, vector sum, sort by distance to the
//! origin and, with at least two points, the pairwise distance table. Used by
//! the session's demo state and by the non-interactive `demo` command.

use serde::Serialize;

use crate::error::PointsError;
use crate::ops::{self, DistanceTriple, Quadrant, SortCriteria};
use crate::point::Point;

pub const DEMO_SCALE: f64 = 2.0;

/// Results of every demo step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DemoReport {
    pub input: Vec<Point>,
    pub scaled: Vec<Point>,
    pub first_quadrant: Vec<Point>,
    pub total_vector: Point,
    pub sorted_by_distance: Vec<Point>,
    /// `None` with fewer than two points.
    pub distances: Option<Vec<DistanceTriple>>,
}

pub fn functional_demo(points: &[Point]) -> Result<DemoReport, PointsError> {
    let distances = if points.len() >= 2 {
        Some(ops::pairwise_distances(points)?)
    } else {
        None
    };
    Ok(DemoReport {
        input: points.to_vec(),
        scaled: ops::scale_points(points, DEMO_SCALE)?,
        first_quadrant: ops::filter_by_quadrant(points, Quadrant::First)?,
        total_vector: ops::total_vector(points),
        sorted_by_distance: ops::sort_by_criteria(points, SortCriteria::DistanceToOrigin)?,
        distances,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_runs_every_step() {
        let p = vec![Point::new(3.0, 4.0), Point::new(-1.0, 0.0)];
        let report = functional_demo(&p).unwrap();
        assert_eq!(report.scaled, vec![Point::new(6.0, 8.0), Point::new(-2.0, 0.0)]);
        assert_eq!(report.first_quadrant, vec![Point::new(3.0, 4.0)]);
        assert_eq!(report.total_vector, Point::new(2.0, 4.0));
        assert_eq!(report.sorted_by_distance, vec![p[1], p[0]]);
        assert_eq!(report.distances.map(|d| d.len()), Some(1));
    }

    #[test]
    fn single_point_skips_distances() {
        let report = functional_demo(&[Point::new(1.0, 1.0)]).unwrap();
        assert!(report.distances.is_none());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(functional_demo(&[]), Err(PointsError::EmptyCollection));
    }
}
