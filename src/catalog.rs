//! In-memory city catalog loaded from a JSON document

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{GeonearError, Result};
use crate::linear::{nearest_linear, Nearest};
use crate::record::{CityRecord, Coordinate};

/// An ordered, read-only collection of city records.
///
/// Insertion order is preserved; it carries no meaning beyond serving as
/// the tie-break during nearest resolution.
#[derive(Debug, Default)]
pub struct Catalog {
    cities: Vec<CityRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating every coordinate.
    pub fn new(cities: Vec<CityRecord>) -> Result<Self> {
        for city in &cities {
            city.validate()?;
        }
        Ok(Self { cities })
    }

    /// Load a catalog from a JSON array of city documents:
    /// `[{"id", "name", "state", "country", "coord": {"lon", "lat"}}, ...]`
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let cities: Vec<CityRecord> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| GeonearError::Serialization(e.to_string()))?;
        Self::new(cities)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.cities
    }

    /// Nearest record to `query` by proxy squared distance.
    pub fn nearest(&self, query: &Coordinate) -> Result<Nearest> {
        nearest_linear(&self.cities, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::TempDir;

    const CITY_LIST: &str = r#"[
        {"id": 1, "name": "Minato", "state": "", "country": "JP",
         "coord": {"lon": 139.0, "lat": 35.0}},
        {"id": 2, "name": "Chiba", "state": "", "country": "JP",
         "coord": {"lon": 140.0, "lat": 36.0}}
    ]"#;

    fn write_catalog(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("city.list.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, CITY_LIST);

        let catalog = Catalog::load_json(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].name, "Minato");
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Catalog::load_json(dir.path().join("absent.json"));
        assert!(matches!(result, Err(GeonearError::Io(_))));
    }

    #[test]
    fn test_load_json_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, "{not json");
        let result = Catalog::load_json(&path);
        assert!(matches!(result, Err(GeonearError::Serialization(_))));
    }

    #[test]
    fn test_load_json_rejects_out_of_range() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(
            &dir,
            r#"[{"id": 1, "name": "bad", "state": "", "country": "XX",
                 "coord": {"lon": 512.0, "lat": 0.0}}]"#,
        );
        let result = Catalog::load_json(&path);
        assert!(matches!(result, Err(GeonearError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_nearest() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir, CITY_LIST);
        let catalog = Catalog::load_json(&path).unwrap();

        let nearest = catalog.nearest(&Coordinate::new(35.1, 139.1)).unwrap();
        assert_eq!(nearest.city.id, 1);
        assert_relative_eq!(nearest.sq_dist, 0.02, epsilon = 1e-9);
    }

    #[test]
    fn test_nearest_empty_catalog() {
        let catalog = Catalog::new(vec![]).unwrap();
        let result = catalog.nearest(&Coordinate::new(0.0, 0.0));
        assert!(matches!(result, Err(GeonearError::EmptyCatalog)));
    }
}
