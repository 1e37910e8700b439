//! Errors surfaced by the point operations.

use std::fmt;

use crate::point::Point;

/// Precondition failures of the operations in [`crate::ops`].
#[derive(Clone, Debug, PartialEq)]
pub enum PointsError {
    /// The operation needs at least one point.
    EmptyCollection,
    /// The operation works on pairs and got too few points.
    InsufficientPoints { required: usize, actual: usize },
    /// Out-of-range quadrant, unknown sort criteria, malformed point text.
    InvalidArgument { reason: String },
}

impl PointsError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCollection => write!(f, "the point list is empty"),
            Self::InsufficientPoints { required, actual } => write!(
                f,
                "not enough points: need at least {required}, got {actual}"
            ),
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for PointsError {}

pub(crate) fn ensure_non_empty(points: &[Point]) -> Result<(), PointsError> {
    if points.is_empty() {
        return Err(PointsError::EmptyCollection);
    }
    Ok(())
}

pub(crate) fn ensure_at_least(points: &[Point], required: usize) -> Result<(), PointsError> {
    if points.len() < required {
        return Err(PointsError::InsufficientPoints {
            required,
            actual: points.len(),
        });
    }
    Ok(())
}
