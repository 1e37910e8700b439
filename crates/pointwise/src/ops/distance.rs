//! Distance queries: pairwise table, nearest neighbours, path length, radius filter.

use crate::error::{ensure_at_least, ensure_non_empty, PointsError};
use crate::point::Point;

use super::types::{ClosestPair, DistanceTriple};

/// One row per unordered pair `(points[i], points[j])`, `i < j`, in index order.
/// Yields `n (n - 1) / 2` rows.
pub fn pairwise_distances(points: &[Point]) -> Result<Vec<DistanceTriple>, PointsError> {
    ensure_at_least(points, 2)?;
    Ok(points
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| {
            points[i + 1..].iter().map(move |&b| DistanceTriple {
                a,
                b,
                distance: a.distance(b),
            })
        })
        .collect())
}

/// Nearest point to `points[index]` among all other indices.
///
/// Duplicates of the target at other indices count as neighbours at distance 0.
/// Ties go to the earliest index.
pub fn find_closest(points: &[Point], index: usize) -> Result<Point, PointsError> {
    ensure_at_least(points, 2)?;
    let target = points.get(index).copied().ok_or_else(|| {
        PointsError::invalid(format!(
            "index {index} out of range for {} points",
            points.len()
        ))
    })?;
    let best = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != index)
        .map(|(_, &p)| (p, target.distance(p)))
        .fold(None, |best: Option<(Point, f64)>, (p, d)| match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((p, d)),
        });
    best.map(|(p, _)| p)
        .ok_or(PointsError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        })
}

/// Nearest neighbour of every point, in input order.
pub fn closest_for_each(points: &[Point]) -> Result<Vec<ClosestPair>, PointsError> {
    ensure_at_least(points, 2)?;
    points
        .iter()
        .enumerate()
        .map(|(i, &target)| {
            find_closest(points, i).map(|nearest| ClosestPair { target, nearest })
        })
        .collect()
}

/// Length of the polyline visiting `points` in order; `0` for fewer than two.
pub fn total_path_distance(points: &[Point]) -> f64 {
    let Some((&first, rest)) = points.split_first() else {
        return 0.0;
    };
    let (total, _last) = rest
        .iter()
        .fold((0.0, first), |(total, prev), &p| (total + prev.distance(p), p));
    total
}

/// Points within `max_distance` of `reference` (inclusive), in input order.
pub fn filter_by_distance(
    points: &[Point],
    reference: Point,
    max_distance: f64,
) -> Result<Vec<Point>, PointsError> {
    ensure_non_empty(points)?;
    Ok(points
        .iter()
        .copied()
        .filter(|p| p.distance(reference) <= max_distance)
        .collect())
}
