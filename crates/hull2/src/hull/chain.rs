//! Andrew's monotone chain hull builder.
//!
//! Two sweeps over the sorted input: top chain left-to-right, bottom chain
//! right-to-left, each with the same turn-removal rule. The per-chain last
//! point is dropped before concatenation since each chain's endpoint opens
//! the other chain. Total over every finite input, including duplicates and
//! fully collinear sets; no failure path.

use super::point::{compare_points, Point2, Polygon};

/// Scalar 2D cross product `(p1 - p2) × (p - p2)`.
///
/// Sign gives the turn direction of `p` relative to the directed segment
/// p2→p1: negative is a strict right turn, zero collinear, positive left.
#[inline]
pub fn cross<P: Point2>(p2: &P, p1: &P, p: &P) -> f64 {
    (p1.x() - p2.x()) * (p.y() - p2.y()) - (p1.y() - p2.y()) * (p.x() - p2.x())
}

/// Convex hull of an arbitrary point sequence.
///
/// Copies the input, stable-sorts the copy by `compare_points`, then runs the
/// O(n) chain builder. O(n log n) overall; the input slice is not mutated.
pub fn convex_hull<P: Point2 + Clone>(points: &[P]) -> Polygon<P> {
    let mut sorted: Vec<P> = points.to_vec();
    sorted.sort_by(|a, b| compare_points(a, b));
    convex_hull_sorted(&sorted)
}

/// Convex hull of a sequence already sorted ascending by x, ties by y.
///
/// O(n). Returns the boundary as top chain then bottom chain: clockwise in a
/// y-up frame, starting at the leftmost-lowest point. Collinear interior
/// points are excluded; every output point is one of the input values.
/// Inputs of length <= 1 come back unchanged.
pub fn convex_hull_sorted<P: Point2 + Clone>(points: &[P]) -> Polygon<P> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    let top = sweep(points.iter(), points.len());
    let bottom = sweep(points.iter().rev(), points.len());

    // All-collinear or single-location input collapses both chains to the
    // same point; returning one copy avoids a duplicated one-point hull.
    if top.len() == 1 && bottom.len() == 1 {
        let (t, b) = (&top[0], &bottom[0]);
        if t.x() == b.x() && t.y() == b.y() {
            return top;
        }
    }

    let mut hull = top;
    hull.extend(bottom);
    hull
}

/// One chain sweep: append each point after popping non-right turns, then
/// drop the final point (it opens the opposite chain).
fn sweep<'a, P, I>(points: I, n: usize) -> Vec<P>
where
    P: Point2 + Clone + 'a,
    I: Iterator<Item = &'a P>,
{
    let mut chain: Vec<P> = Vec::with_capacity(n);
    for p in points {
        while chain.len() >= 2 {
            let p1 = &chain[chain.len() - 1];
            let p2 = &chain[chain.len() - 2];
            // A strict right turn keeps the middle point; left turns and
            // collinear triples remove it.
            if cross(p2, p1, p) < 0.0 {
                break;
            }
            chain.pop();
        }
        chain.push(p.clone());
    }
    chain.pop();
    chain
}
