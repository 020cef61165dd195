//! Point capability trait and the x-then-y comparator.
//!
//! - `Point2`: minimal coordinate accessors; the hull is generic over any
//!   implementor and returns the caller's own values.
//! - `compare_points`: the total order the chain builder requires.

use std::cmp::Ordering;

use nalgebra::Vector2;

/// Anything exposing two f64 coordinates.
pub trait Point2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// Hull boundary: ordered vertex sequence, implicitly cyclic (no closing edge).
pub type Polygon<P> = Vec<P>;

impl Point2 for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Point2 for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Point2 for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

/// Ascending x, ties broken ascending y; coordinate-equal points compare equal.
///
/// Exposed so external sorting utilities can feed `convex_hull_sorted` with
/// the same tie-break rule. NaN coordinates compare as equal (no robustness
/// beyond ordinary float comparison).
#[inline]
pub fn compare_points<P: Point2>(a: &P, b: &P) -> Ordering {
    match a.x().partial_cmp(&b.x()).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y().partial_cmp(&b.y()).unwrap_or(Ordering::Equal),
        o => o,
    }
}
