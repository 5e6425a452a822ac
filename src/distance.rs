//! Proxy distance metric for ranking candidates

use crate::record::Coordinate;

/// Squared coordinate-difference between a query and a candidate, in
/// degree units: `(q.lat - c.lat)² + (q.lon - c.lon)²`.
///
/// This is a comparison-only surrogate for geographic distance: it ignores
/// earth curvature and the narrowing of a longitude degree toward the
/// poles. It is valid for ranking candidates against one query, never as an
/// absolute magnitude. Always ≥ 0; zero iff the coordinates are identical.
pub fn proxy_sq_distance(q: &Coordinate, c: &Coordinate) -> f64 {
    (q.lat - c.lat).powi(2) + (q.lon - c.lon).powi(2)
}
