//! Radius predicate shared by the count and fetch paths.

use crate::distance::proxy_sq_distance;
use crate::error::{GeonearError, Result};
use crate::record::{CityRecord, Coordinate};

/// Inclusion test `(lat - q.lat)² + (lon - q.lon)² < threshold`.
///
/// Both store query paths evaluate rows through this one type, so count and
/// fetch can never disagree on how a row is matched or decoded.
#[derive(Debug, Clone, Copy)]
pub struct RadiusPredicate {
    query: Coordinate,
    threshold: f64,
}

impl RadiusPredicate {
    pub fn new(query: Coordinate, threshold: f64) -> Self {
        Self { query, threshold }
    }

    /// The predicate is usable only with a finite bound and query point.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite()
            || !self.query.lat.is_finite()
            || !self.query.lon.is_finite()
        {
            return Err(GeonearError::Query(format!(
                "non-finite radius predicate: threshold={}, query=(lat={}, lon={})",
                self.threshold, self.query.lat, self.query.lon
            )));
        }
        Ok(())
    }

    /// Whether `row` lies strictly inside the bound.
    pub fn matches(&self, row: &CityRecord) -> bool {
        proxy_sq_distance(&self.query, &row.coord) < self.threshold
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
