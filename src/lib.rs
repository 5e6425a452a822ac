//! # geonear
//!
//! Nearest-city lookup over a JSON catalog or an embedded persistent store.
//!
//! This library provides:
//! - City records with validated coordinates
//! - A proxy squared-distance metric for ranking candidates
//! - Brute-force nearest lookup over an in-memory catalog
//! - A journaled, snapshot-backed persistent city store
//! - Radius-expanding nearest lookup that narrows candidates store-side
//!
//! ## Example
//!
//! ```rust
//! use geonear::{Catalog, CityRecord, Coordinate};
//!
//! let catalog = Catalog::new(vec![
//!     CityRecord::new(1, "Kawasaki", "", "JP", Coordinate::new(35.52, 139.72)),
//!     CityRecord::new(2, "Tokyo", "", "JP", Coordinate::new(35.69, 139.69)),
//! ]).unwrap();
//!
//! let nearest = catalog.nearest(&Coordinate::new(35.6, 139.7)).unwrap();
//! assert_eq!(nearest.city.name, "Kawasaki");
//! ```

pub mod catalog;
pub mod distance;
pub mod error;
pub mod linear;
pub mod radius;
pub mod record;
pub mod store;
pub mod telemetry;

pub use catalog::Catalog;
pub use error::{GeonearError, Result};
pub use linear::{nearest_linear, Nearest};
pub use radius::nearest_in_store;
pub use record::{CityRecord, Coordinate};
pub use store::engine::{CityStore, StoreConfig};
pub use store::predicate::RadiusPredicate;
