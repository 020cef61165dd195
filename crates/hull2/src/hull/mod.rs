//! Convex hull of 2D point sets (Andrew's monotone chain).
//!
//! Purpose
//! - One comparator (`compare_points`), one O(n) builder over presorted input
//!   (`convex_hull_sorted`), one composing entry point (`convex_hull`).
//! - Generic over any point-like type (`Point2`), so caller payloads survive
//!   the hull: output values are clones of input values, never bare pairs.
//!
//! Conventions
//! - Sort order: ascending x, ties ascending y (stable).
//! - Collinear interior points are dropped: only strict right turns survive
//!   on each chain, so the output holds true vertices and required endpoints.
//! - The result runs top chain first, then bottom chain; clockwise in a y-up
//!   frame, starting at the leftmost-lowest point. Implicitly cyclic.
//!
//! Code cross-refs: `point::{Point2, compare_points}`, `chain::convex_hull_sorted`

mod chain;
mod point;

pub use chain::{convex_hull, convex_hull_sorted, cross};
pub use point::{compare_points, Point2, Polygon};
