use super::{Point2, Point2f, DEGENERATE_LEN_SQ};

/// Returns the minimum distance from point `p` to the line segment `a`→`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < DEGENERATE_LEN_SQ {
        // Zero-length segment.
        return nalgebra::distance(p, a);
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    nalgebra::distance(p, &(a + ab * t))
}

/// Squared Euclidean distance between two stored vertices.
#[must_use]
pub fn dist_sq(a: &Point2f, b: &Point2f) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}
