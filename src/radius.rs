//! Radius-expanding nearest lookup against the persistent store.
//!
//! Instead of scanning every row, the locator asks the store how many rows
//! fall inside a growing proxy-distance bound, fetches the first non-empty
//! candidate set, and resolves the true nearest in memory.

use log::debug;

use crate::error::{GeonearError, Result};
use crate::linear::{nearest_linear, Nearest};
use crate::record::Coordinate;
use crate::store::engine::CityStore;
use crate::store::predicate::RadiusPredicate;

/// Starting inclusion bound, in proxy-distance units.
pub const INITIAL_THRESHOLD: f64 = 0.1;
/// Growth factor applied whenever the candidate set comes back empty.
pub const THRESHOLD_GROWTH: f64 = 10.0;

/// Find the record nearest to `query` among everything in `store`.
///
/// An empty store fails with `NotFound` before any probing. For a non-empty
/// store of validated coordinates the loop finishes within
/// `ceil(log10(d_max / INITIAL_THRESHOLD)) + 1` probes, where `d_max` is
/// the proxy distance to the farthest record. Ties among candidates are
/// resolved by the in-memory scan's first-seen rule, not by the store.
pub fn nearest_in_store(store: &CityStore, query: &Coordinate) -> Result<Nearest> {
    if store.is_empty() {
        return Err(GeonearError::NotFound);
    }

    let mut threshold = INITIAL_THRESHOLD;
    while threshold.is_finite() {
        let predicate = RadiusPredicate::new(*query, threshold);
        let candidates = store.count(&predicate)?;
        debug!("radius probe: threshold={}, candidates={}", threshold, candidates);
        if candidates > 0 {
            let rows = store.fetch(&predicate)?;
            return nearest_linear(&rows, query);
        }
        threshold *= THRESHOLD_GROWTH;
    }

    // Every validated row lies within some finite bound; bail out rather
    // than spin if the threshold ever overflows.
    Err(GeonearError::NotFound)
}
