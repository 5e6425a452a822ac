//! Codec helpers: bincode for store payloads, JSON for the manifest.

use crate::error::{GeonearError, Result};
use crate::record::CityRecord;
use serde::{Deserialize, Serialize};

/// Serializable full-store state written by a checkpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub rows: Vec<CityRecord>,
}

/// Encode a value to bincode bytes.
pub fn to_bincode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    bincode::serialize(value).map_err(|e| GeonearError::Serialization(e.to_string()))
}

/// Decode a value from bincode bytes.
pub fn from_bincode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T> {
    bincode::deserialize(bytes).map_err(|e| GeonearError::Serialization(e.to_string()))
}
