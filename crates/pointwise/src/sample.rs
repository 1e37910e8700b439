//! Seeded uniform point samples.
//!
//! Determinism: the same `(count, bounds, seed)` always yields the same points,
//! so a session can be replayed from the seed it printed.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point;

/// Axis-aligned box `[min.x, max.x] × [min.y, max.y]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Square `[-half, half]²`.
    pub fn symmetric(half: f64) -> Self {
        Self {
            min: Point::new(-half, -half),
            max: Point::new(half, half),
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::symmetric(10.0)
    }
}

/// `count` points drawn uniformly from `bounds`, rounded to hundredths.
/// A degenerate axis (min >= max) pins that coordinate to `min`.
pub fn sample_points(count: usize, bounds: Bounds, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let v = Vector2::new(
                sample_axis(&mut rng, bounds.min.x, bounds.max.x),
                sample_axis(&mut rng, bounds.min.y, bounds.max.y),
            );
            Point::from(v.map(round_hundredths))
        })
        .collect()
}

fn sample_axis<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if lo < hi {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

#[inline]
fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
