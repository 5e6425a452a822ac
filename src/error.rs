//! Error types for the nearest-city lookup

use thiserror::Error;

/// Result type alias for geonear operations
pub type Result<T> = std::result::Result<T, GeonearError>;

/// Error types that can occur during ingestion, storage, and search
#[derive(Error, Debug)]
pub enum GeonearError {
    #[error("Malformed coordinate: {input:?}")]
    ParseCoordinate { input: String },

    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Storage initialization failed at {path}: {reason}")]
    StorageInit { path: String, reason: String },

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Catalog has no records")]
    EmptyCatalog,

    #[error("Store has no records")]
    NotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
