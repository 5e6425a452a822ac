//! Store engine: journal + snapshots for a crash-safe city table.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use crate::error::{GeonearError, Result};
use crate::record::CityRecord;
use crate::store::codec::StoreSnapshot;
use crate::store::journal::{Journal, JournalEntry};
use crate::store::predicate::RadiusPredicate;
use crate::store::snapshot::SnapshotManager;

/// Configuration for the city store.
pub struct StoreConfig {
    /// Checkpoint after this many journal entries.
    pub checkpoint_interval: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            checkpoint_interval: 1000,
        }
    }
}

/// Persistent city table keyed by record id.
///
/// The logical schema is the `cities` table: integer primary key `id`, text
/// `name`/`state`/`country`, real `lon`/`lat`. One handle is opened per
/// process and passed explicitly into every operation.
pub struct CityStore {
    rows: BTreeMap<i64, CityRecord>,
    journal: Journal,
    snapshots: SnapshotManager,
    journal_count: usize,
    config: StoreConfig,
}

impl CityStore {
    /// Open or create a store at the given directory.
    ///
    /// Idempotent: creates the directory if absent, opens/creates the
    /// journal and snapshot files, and recovers state from the last
    /// snapshot plus journal replay. Any filesystem failure surfaces as
    /// `StorageInit`.
    pub fn open(dir: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| init_error(dir, e))?;

        let snapshots = SnapshotManager::new(dir).map_err(|e| init_error(dir, e))?;
        let journal = Journal::open(dir.join("journal.log")).map_err(|e| init_error(dir, e))?;

        let mut rows = BTreeMap::new();
        if let Some(snapshot) = snapshots.load().map_err(|e| init_error(dir, e))? {
            for row in snapshot.rows {
                rows.insert(row.id, row);
            }
        }

        // Replay the journal on top of the snapshot
        let entries = journal.replay().map_err(|e| init_error(dir, e))?;
        for entry in &entries {
            Self::apply(&mut rows, entry);
        }
        let journal_count = entries.len();

        Ok(Self {
            rows,
            journal,
            snapshots,
            journal_count,
            config,
        })
    }

    /// Apply a single journal entry to the row map.
    fn apply(rows: &mut BTreeMap<i64, CityRecord>, entry: &JournalEntry) {
        match entry {
            JournalEntry::Upsert(row) => {
                rows.insert(row.id, row.clone());
            }
            JournalEntry::UpsertBatch(batch) => {
                for row in batch {
                    rows.insert(row.id, row.clone());
                }
            }
            JournalEntry::Checkpoint => {}
        }
    }

    /// Replace-into a single record, journaling it first.
    ///
    /// An existing row with the same id is fully overwritten, not merged.
    pub fn upsert(&mut self, record: CityRecord) -> Result<()> {
        record.validate()?;
        self.journal.append(&JournalEntry::Upsert(record.clone()))?;
        self.rows.insert(record.id, record);
        self.journal_count += 1;
        self.maybe_checkpoint()
    }

    /// Replace-into a whole batch, all-or-nothing.
    ///
    /// Every record is validated up front and the batch is journaled as a
    /// single frame; a failure or interruption before the frame is durable
    /// leaves none of the records visible after recovery.
    pub fn upsert_batch(&mut self, records: &[CityRecord]) -> Result<()> {
        for record in records {
            record.validate()?;
        }
        self.journal
            .append(&JournalEntry::UpsertBatch(records.to_vec()))?;
        for record in records {
            self.rows.insert(record.id, record.clone());
        }
        self.journal_count += 1;
        self.maybe_checkpoint()
    }

    /// Number of rows satisfying the predicate.
    pub fn count(&self, predicate: &RadiusPredicate) -> Result<usize> {
        predicate.validate()?;
        Ok(self.rows.values().filter(|row| predicate.matches(row)).count())
    }

    /// The rows satisfying the predicate, as full typed records.
    ///
    /// Shares `RadiusPredicate` with `count`, so the two paths always agree
    /// on which rows qualify.
    pub fn fetch(&self, predicate: &RadiusPredicate) -> Result<Vec<CityRecord>> {
        predicate.validate()?;
        Ok(self
            .rows
            .values()
            .filter(|row| predicate.matches(row))
            .cloned()
            .collect())
    }

    /// Get a record by id.
    pub fn get(&self, id: i64) -> Option<&CityRecord> {
        self.rows.get(&id)
    }

    /// Iterate over all records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CityRecord> {
        self.rows.values()
    }

    /// Number of rows in the store.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Force a checkpoint: snapshot + truncate the journal.
    pub fn checkpoint(&mut self) -> Result<()> {
        let snapshot = StoreSnapshot {
            rows: self.rows.values().cloned().collect(),
        };
        self.snapshots.save(&snapshot)?;

        self.journal.append(&JournalEntry::Checkpoint)?;
        self.journal.truncate()?;
        self.journal_count = 0;

        Ok(())
    }

    fn maybe_checkpoint(&mut self) -> Result<()> {
        if self.journal_count >= self.config.checkpoint_interval {
            self.checkpoint()?;
        }
        Ok(())
    }
}

fn init_error(dir: &Path, err: impl fmt::Display) -> GeonearError {
    GeonearError::StorageInit {
        path: dir.display().to_string(),
        reason: err.to_string(),
    }
}
