//! Append-only journal for crash-safe writes.
//!
//! Each entry is written as: [length: u32][crc32: u32][payload: bincode(JournalEntry)]
//! The journal is append-only and fsynced after each write. A batch is one
//! frame, so replay sees it fully or not at all.

use crate::error::{GeonearError, Result};
use crate::record::CityRecord;
use crate::store::codec;
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// A single journal entry.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub enum JournalEntry {
    /// Replace-into of a single row, keyed by record id.
    Upsert(CityRecord),
    /// Replace-into of a whole batch.
    UpsertBatch(Vec<CityRecord>),
    Checkpoint,
}

/// Journal file manager.
pub struct Journal {
    path: PathBuf,
    file: File,
}

impl Journal {
    /// Open (or create) a journal file at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }

    /// Append an entry to the journal and fsync.
    pub fn append(&mut self, entry: &JournalEntry) -> Result<()> {
        let payload = codec::to_bincode(entry)?;
        let crc = crc32fast::hash(&payload);
        let len = payload.len() as u32;

        self.file.write_all(&len.to_le_bytes())?;
        self.file.write_all(&crc.to_le_bytes())?;
        self.file.write_all(&payload)?;
        self.sync()?;

        Ok(())
    }

    /// Fsync the journal file.
    pub fn sync(&self) -> Result<()> {
        self.file.sync_all()?;
        Ok(())
    }

    /// Replay all valid entries.
    /// Stops at the first corrupted or incomplete frame (crash tolerance).
    pub fn replay(&self) -> Result<Vec<JournalEntry>> {
        let file = File::open(&self.path)?;
        let mut reader = BufReader::new(file);
        let mut entries = Vec::new();

        loop {
            // Read length
            let mut len_buf = [0u8; 4];
            match reader.read_exact(&mut len_buf) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(GeonearError::Io(e)),
            }
            let len = u32::from_le_bytes(len_buf) as usize;

            // Read CRC
            let mut crc_buf = [0u8; 4];
            match reader.read_exact(&mut crc_buf) {
                Ok(()) => {}
                Err(_) => break, // Truncated — stop
            }
            let expected_crc = u32::from_le_bytes(crc_buf);

            // Read payload
            let mut payload = vec![0u8; len];
            match reader.read_exact(&mut payload) {
                Ok(()) => {}
                Err(_) => break, // Truncated — stop
            }

            // Verify CRC
            let actual_crc = crc32fast::hash(&payload);
            if actual_crc != expected_crc {
                break; // Corrupted — stop
            }

            // Deserialize
            match codec::from_bincode::<JournalEntry>(&payload) {
                Ok(entry) => entries.push(entry),
                Err(_) => break, // Corrupted — stop
            }
        }

        Ok(entries)
    }

    /// Truncate the journal file (after a successful checkpoint).
    pub fn truncate(&mut self) -> Result<()> {
        self.file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        Ok(())
    }
}
