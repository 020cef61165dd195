//! 2D convex hulls via Andrew's monotone chain.
//!
//! Purpose
//! - Provide a small, total hull primitive: a stable x-then-y comparator,
//!   an O(n) chain builder over presorted input, and a composing entry point
//!   that sorts first. Callers' richer point types pass through unmodified
//!   (anything implementing `Point2` works).
//!
//! Scope
//! - 2D only, plain f64 comparison. No incremental maintenance, no exact
//!   arithmetic, no rendering.

pub mod hull;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{compare_points, convex_hull, convex_hull_sorted, cross, Point2, Polygon};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{compare_points, convex_hull, convex_hull_sorted, cross, Point2, Polygon};
    pub use crate::rand::{draw_points_disc, DiscCfg, PointCount, ReplayToken};
    pub use nalgebra::Vector2 as Vec2;
}
