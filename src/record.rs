//! City records and coordinates

use crate::error::{GeonearError, Result};
use serde::{Deserialize, Serialize};

/// A geographic point in degrees.
///
/// Field order is lon-then-lat, matching the `coord` object of the
/// ingestion document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Create a coordinate. Latitude first, matching the CLI argument order.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lon, lat }
    }

    /// Parse a query coordinate from two numeric arguments, latitude first.
    ///
    /// Each argument must parse as a finite `f64`; anything else (including
    /// the literal `NaN`/`inf` spellings `f64` would otherwise accept) is a
    /// `ParseCoordinate` error.
    pub fn parse(lat: &str, lon: &str) -> Result<Self> {
        Ok(Self::new(parse_axis(lat)?, parse_axis(lon)?))
    }

    /// Check that the coordinate is finite and inside the valid degree
    /// ranges: latitude in [-90, 90], longitude in [-180, 180].
    pub fn validate(&self) -> Result<()> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lon_ok = self.lon.is_finite() && (-180.0..=180.0).contains(&self.lon);
        if !lat_ok || !lon_ok {
            return Err(GeonearError::InvalidCoordinate {
                lat: self.lat,
                lon: self.lon,
            });
        }
        Ok(())
    }
}

fn parse_axis(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(GeonearError::ParseCoordinate {
            input: s.to_string(),
        }),
    }
}

/// One row of the city catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub country: String,
    pub coord: Coordinate,
}

impl CityRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        coord: Coordinate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            state: state.into(),
            country: country.into(),
            coord,
        }
    }

    /// Validate the record's coordinate.
    pub fn validate(&self) -> Result<()> {
        self.coord.validate()
    }
}
