//! Maps, filters, folds and sorts that keep the point shape.

use crate::error::{ensure_non_empty, PointsError};
use crate::point::Point;

use super::types::{Quadrant, SortCriteria, Stage};

/// Every coordinate multiplied by `factor`.
pub fn scale_points(points: &[Point], factor: f64) -> Result<Vec<Point>, PointsError> {
    ensure_non_empty(points)?;
    Ok(points.iter().map(|p| p.scaled(factor)).collect())
}

/// Points of `quadrant`, in input order.
pub fn filter_by_quadrant(points: &[Point], quadrant: Quadrant) -> Result<Vec<Point>, PointsError> {
    ensure_non_empty(points)?;
    Ok(points
        .iter()
        .copied()
        .filter(|p| quadrant.contains(*p))
        .collect())
}

/// Sum of all points as vectors; `(0, 0)` for an empty input.
pub fn total_vector(points: &[Point]) -> Point {
    points.iter().fold(Point::ORIGIN, |acc, p| acc + *p)
}

/// Stable sort by `criteria`; equal keys keep their input order.
pub fn sort_by_criteria(points: &[Point], criteria: SortCriteria) -> Result<Vec<Point>, PointsError> {
    ensure_non_empty(points)?;
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| criteria.compare(a, b));
    Ok(sorted)
}

/// Apply `stages` left to right. Each stage maps the whole set before the
/// next one starts.
pub fn transform_pipeline(points: &[Point], stages: &[Stage]) -> Result<Vec<Point>, PointsError> {
    ensure_non_empty(points)?;
    Ok(stages.iter().fold(points.to_vec(), |current, stage| {
        current.into_iter().map(|p| stage(p)).collect()
    }))
}

/// Pipeline stage shifting by `(dx, dy)`.
pub fn translate(dx: f64, dy: f64) -> Stage {
    let offset = Point::new(dx, dy);
    Box::new(move |p| p + offset)
}

/// Pipeline stage scaling by `factor`.
pub fn scale_by(factor: f64) -> Stage {
    Box::new(move |p| p.scaled(factor))
}
