//! Random 2D point clouds (disc sampler + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic point-cloud sampler for hull tests and
//!   benchmarks. Parameterizable, reproducible, returns plain `Vector2<f64>`
//!   points ready for `convex_hull`.
//!
//! Model
//! - Uniform points in a disc of configurable radius (radius via the sqrt
//!   transform so density is uniform in area, not radius).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draw-size distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n,
            PointCount::Uniform { min, max } => {
                let hi = max.max(min);
                rng.gen_range(min..=hi)
            }
        }
    }
}

/// Disc sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiscCfg {
    pub count: PointCount,
    /// Disc radius; clamped to a small positive floor.
    pub radius: f64,
}
impl Default for DiscCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(64),
            radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random point cloud uniform in a disc around the origin.
pub fn draw_points_disc(cfg: DiscCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.count.sample(&mut rng);
    let r0 = cfg.radius.max(1e-9);
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = rng.gen::<f64>().sqrt() * r0;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::convex_hull;

    #[test]
    fn reproducible_draw() {
        let cfg = DiscCfg {
            count: PointCount::Uniform { min: 10, max: 40 },
            radius: 2.0,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_points_disc(cfg, tok);
        let p2 = draw_points_disc(cfg, tok);
        assert_eq!(p1.len(), p2.len());
        for (a, b) in p1.iter().zip(p2.iter()) {
            assert!((a - b).norm() == 0.0);
        }
    }

    #[test]
    fn distinct_tokens_distinct_draws() {
        let cfg = DiscCfg::default();
        let a = draw_points_disc(cfg, ReplayToken { seed: 1, index: 0 });
        let b = draw_points_disc(cfg, ReplayToken { seed: 1, index: 1 });
        assert!(a.iter().zip(b.iter()).any(|(p, q)| (p - q).norm() > 0.0));
    }

    #[test]
    fn draws_stay_in_disc_and_hull_is_subset() {
        let cfg = DiscCfg {
            count: PointCount::Fixed(200),
            radius: 1.5,
        };
        let pts = draw_points_disc(cfg, ReplayToken { seed: 9, index: 3 });
        assert!(pts.iter().all(|p| p.norm() <= 1.5 + 1e-12));
        let hull = convex_hull(&pts);
        assert!(hull.iter().all(|h| pts.contains(h)));
    }
}
