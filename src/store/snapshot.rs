//! Snapshot: persist and recover full store state.

use crate::error::{GeonearError, Result};
use crate::store::codec::{self, StoreSnapshot};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Manages saving and loading store snapshots.
pub struct SnapshotManager {
    dir: PathBuf,
}

impl SnapshotManager {
    /// Create a snapshot manager for the given directory.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn snapshot_path(&self) -> PathBuf {
        self.dir.join("snapshot.bin")
    }

    fn manifest_path(&self) -> PathBuf {
        self.dir.join("manifest.json")
    }

    /// Save a store snapshot to disk.
    pub fn save(&self, snapshot: &StoreSnapshot) -> Result<()> {
        // Snapshot data (bincode)
        let data = codec::to_bincode(snapshot)?;
        fs::write(self.snapshot_path(), &data)?;

        // Manifest (JSON) for human-readable metadata
        let manifest = serde_json::json!({
            "row_count": snapshot.rows.len(),
        });
        let manifest_bytes = serde_json::to_vec_pretty(&manifest)
            .map_err(|e| GeonearError::Serialization(e.to_string()))?;
        fs::write(self.manifest_path(), &manifest_bytes)?;

        Ok(())
    }

    /// Load the snapshot, or None if none has been written yet.
    ///
    /// Reads through a best-effort memory map, falling back to a plain read
    /// when mapping is unavailable.
    pub fn load(&self) -> Result<Option<StoreSnapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }

        let file = File::open(&path)?;
        let snapshot = match unsafe { memmap2::Mmap::map(&file) } {
            Ok(map) => codec::from_bincode(&map)?,
            Err(_) => {
                let data = fs::read(&path)?;
                codec::from_bincode(&data)?
            }
        };
        Ok(Some(snapshot))
    }

    /// Check if a snapshot exists.
    pub fn exists(&self) -> bool {
        self.snapshot_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CityRecord, Coordinate};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mgr = SnapshotManager::new(dir.path().join("db")).unwrap();

        let snapshot = StoreSnapshot {
            rows: vec![
                CityRecord::new(1, "Tokyo", "", "JP", Coordinate::new(35.69, 139.69)),
                CityRecord::new(2, "Osaka", "", "JP", Coordinate::new(34.69, 135.50)),
            ],
        };

        mgr.save(&snapshot).unwrap();
        assert!(mgr.exists());

        let loaded = mgr.load().unwrap().unwrap();
        assert_eq!(loaded.rows.len(), 2);
        assert_eq!(loaded.rows[0].name, "Tokyo");
        assert_eq!(loaded.rows[1].coord.lat, 34.69);
    }

    #[test]
    fn test_load_nonexistent() {
        let dir = TempDir::new().unwrap();
        let mgr = SnapshotManager::new(dir.path().join("empty")).unwrap();
        assert!(!mgr.exists());
        assert!(mgr.load().unwrap().is_none());
    }
}
