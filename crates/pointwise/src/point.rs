//! 2D point value type.
//!
//! - `Point`: `Copy` pair of `f64` coordinates. Equality is by value and the
//!   ordering is lexicographic on `(x, y)`.
//! - Vector arithmetic goes through `nalgebra::Vector2` so distances and sums
//!   share one implementation.
//! - `PointList`: display adapter printing a slice as `[(x, y), ...]`.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::Serialize;

use crate::error::PointsError;

/// Point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to the origin.
    #[inline]
    pub fn norm(self) -> f64 {
        self.to_vec2().norm()
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other.to_vec2() - self.to_vec2()).norm()
    }

    /// Both coordinates multiplied by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        (self.to_vec2() * factor).into()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point { x: v.x, y: v.y }
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point { x, y }
    }
}

impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        (self.to_vec2() + rhs.to_vec2()).into()
    }
}

impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        (self.to_vec2() - rhs.to_vec2()).into()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Accepts `x y`, `x,y` and `(x, y)`.
impl FromStr for Point {
    type Err = PointsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [x, y] = parts.as_slice() else {
            return Err(PointsError::invalid(format!(
                "expected two coordinates, got '{}'",
                s.trim()
            )));
        };
        let coord = |text: &str| {
            text.parse::<f64>()
                .map_err(|_| PointsError::invalid(format!("'{text}' is not a number")))
        };
        Ok(Point::new(coord(*x)?, coord(*y)?))
    }
}

/// Displays a slice of points as `[(x1, y1), (x2, y2)]`.
pub struct PointList<'a>(pub &'a [Point]);

impl fmt::Display for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        let expected = Point::new(-1.5, 2.0);
        for text in ["-1.5 2", "-1.5,2", " (-1.5, 2) ", "-1.5 ,  2"] {
            assert_eq!(text.parse::<Point>().unwrap(), expected, "input {text:?}");
        }
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        for text in ["", "1", "1 2 3", "a b", "(1, x)"] {
            let err = text.parse::<Point>().unwrap_err();
            assert!(matches!(err, PointsError::InvalidArgument { .. }), "input {text:?}");
        }
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Point::new(0.0, 5.0) < Point::new(1.0, -5.0));
        assert!(Point::new(1.0, 1.0) < Point::new(1.0, 2.0));
    }

    #[test]
    fn distance_and_display() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
        assert!((b.norm() - 5.0).abs() < 1e-12);
        assert_eq!(a + b, b);
        assert_eq!(b - b, Point::ORIGIN);
        assert_eq!(PointList(&[a, Point::new(-1.0, 0.5)]).to_string(), "[(0, 0), (-1, 0.5)]");
        assert_eq!(PointList(&[]).to_string(), "[]");
    }
}
