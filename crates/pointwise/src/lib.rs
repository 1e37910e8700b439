//! Pure operations over ordered 2D point sets and the console session that
//! applies them.
//!
//! Layout
//! - `point`: the `Point` value type and its parsing/printing.
//! - `ops`: side-effect-free transformations (`&[Point]` in, new value out).
//! - `session`: finite-state menu loop owning the point set and last result.
//! - `demo`: the fixed showcase sequence shared by the session and the CLI.
//! - `sample`: seeded random point batches.
//! - `error`: `PointsError`, the failure taxonomy of `ops`.

pub mod demo;
pub mod error;
pub mod ops;
pub mod point;
pub mod sample;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PointsError;
pub use point::{Point, PointList};

/// Common exports for callers driving a session or the operations directly.
pub mod prelude {
    pub use crate::demo::{functional_demo, DemoReport};
    pub use crate::ops::{
        closest_for_each, filter_by_distance, filter_by_quadrant, find_closest,
        pairwise_distances, scale_by, scale_points, sort_by_criteria, total_path_distance,
        total_vector, transform_pipeline, translate, ClosestPair, DistanceTriple, Quadrant,
        SortCriteria, Stage,
    };
    pub use crate::sample::{sample_points, Bounds};
    pub use crate::session::{Automaton, State};
    pub use crate::{Point, PointList, PointsError};
}
