//! Brute-force nearest lookup — one O(n) pass, O(1) auxiliary space

use crate::distance::proxy_sq_distance;
use crate::error::{GeonearError, Result};
use crate::record::{CityRecord, Coordinate};

/// The winning record of a nearest lookup, with its proxy squared distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest {
    pub city: CityRecord,
    pub sq_dist: f64,
}

/// Scan `records` once and return the one nearest to `query`.
///
/// The best candidate starts at the first record and is replaced only on a
/// strictly smaller distance, so ties keep the earliest-encountered record.
/// An empty slice is an `EmptyCatalog` error.
pub fn nearest_linear(records: &[CityRecord], query: &Coordinate) -> Result<Nearest> {
    let first = records.first().ok_or(GeonearError::EmptyCatalog)?;

    let mut best_idx = 0;
    let mut best_dist = proxy_sq_distance(query, &first.coord);
    for (idx, candidate) in records.iter().enumerate().skip(1) {
        let dist = proxy_sq_distance(query, &candidate.coord);
        if dist < best_dist {
            best_idx = idx;
            best_dist = dist;
        }
    }

    Ok(Nearest {
        city: records[best_idx].clone(),
        sq_dist: best_dist,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn city(id: i64, lat: f64, lon: f64) -> CityRecord {
        CityRecord::new(id, format!("c{}", id), "", "JP", Coordinate::new(lat, lon))
    }

    #[test]
    fn test_nearest_basic() {
        let records = vec![city(1, 35.0, 139.0), city(2, 36.0, 140.0)];
        let query = Coordinate::new(35.1, 139.1);

        let nearest = nearest_linear(&records, &query).unwrap();
        assert_eq!(nearest.city.id, 1);
        assert_relative_eq!(nearest.sq_dist, 0.02, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_single_record() {
        let records = vec![city(7, 0.0, 0.0)];
        let nearest = nearest_linear(&records, &Coordinate::new(10.0, 10.0)).unwrap();
        assert_eq!(nearest.city.id, 7);
        assert_relative_eq!(nearest.sq_dist, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_tie_keeps_earliest() {
        // Both records sit at the same proxy distance from the query
        let records = vec![city(10, 1.0, 0.0), city(20, -1.0, 0.0), city(30, 0.0, 1.0)];
        let query = Coordinate::new(0.0, 0.0);

        let nearest = nearest_linear(&records, &query).unwrap();
        assert_eq!(nearest.city.id, 10);
    }

    #[test]
    fn test_nearest_exact_match() {
        let records = vec![city(1, 35.0, 139.0), city(2, 36.0, 140.0)];
        let nearest = nearest_linear(&records, &Coordinate::new(36.0, 140.0)).unwrap();
        assert_eq!(nearest.city.id, 2);
        assert_eq!(nearest.sq_dist, 0.0);
    }

    #[test]
    fn test_nearest_empty_input() {
        let result = nearest_linear(&[], &Coordinate::new(0.0, 0.0));
        assert!(matches!(result, Err(GeonearError::EmptyCatalog)));
    }
}
