//! Pure operations over ordered point sets.
//!
//! Purpose
//! - A fixed catalogue of side-effect-free transformations on `&[Point]`:
//!   scaling, quadrant and radius filters, vector sum, sorting, staged
//!   pipelines, pairwise distances, nearest neighbours and path length.
//! - Inputs are borrowed and never mutated; every call allocates its result.
//!
//! Conventions
//! - Operations that need data fail fast with `PointsError::EmptyCollection`;
//!   operations on pairs fail with `PointsError::InsufficientPoints`.
//! - `total_vector` and `total_path_distance` are defined on any input.
//! - Pair enumeration follows index order `i < j` of the input.
//! - NaN/∞ coordinates are not validated and propagate through arithmetic.

mod distance;
mod transform;
mod types;

pub use distance::{
    closest_for_each, filter_by_distance, find_closest, pairwise_distances, total_path_distance,
};
pub use transform::{
    filter_by_quadrant, scale_by, scale_points, sort_by_criteria, total_vector,
    transform_pipeline, translate,
};
pub use types::{ClosestPair, DistanceTriple, Quadrant, SortCriteria, Stage};
