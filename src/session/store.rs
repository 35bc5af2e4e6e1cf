//! Persistence of completion records
//!
//! One record per calendar date, read when a puzzle loads and written once
//! when it is finished. The file store keeps every record in a single JSON
//! object keyed by date.

use super::CompletionRecord;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Key-value store of completion records keyed by ISO date
pub trait CompletionStore {
    /// Record for `date`, if one was stored
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be read.
    fn get(&self, date: &str) -> Result<Option<CompletionRecord>, StoreError>;

    /// Store a record under its own date, replacing any previous one
    ///
    /// # Errors
    /// Returns `StoreError` if the backing storage cannot be written.
    fn set(&mut self, record: CompletionRecord) -> Result<(), StoreError>;
}

impl<T: CompletionStore + ?Sized> CompletionStore for &mut T {
    fn get(&self, date: &str) -> Result<Option<CompletionRecord>, StoreError> {
        (**self).get(date)
    }

    fn set(&mut self, record: CompletionRecord) -> Result<(), StoreError> {
        (**self).set(record)
    }
}

/// Errors from the backing storage
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Progress file I/O failed: {e}"),
            Self::Format(e) => write!(f, "Progress file is not valid JSON: {e}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e)
    }
}

/// In-memory store, lost when dropped
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: FxHashMap<String, CompletionRecord>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CompletionStore for MemoryStore {
    fn get(&self, date: &str) -> Result<Option<CompletionRecord>, StoreError> {
        Ok(self.records.get(date).cloned())
    }

    fn set(&mut self, record: CompletionRecord) -> Result<(), StoreError> {
        self.records.insert(record.date.clone(), record);
        Ok(())
    }
}

/// Store backed by a JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        debug!("Progress file: {}", path.display());
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records; a missing file reads as empty
    fn read_all(&self) -> Result<BTreeMap<String, CompletionRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(error) => return Err(error.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Move an unreadable progress file to `<path>.corrupt` so saving can resume
    fn set_aside_corrupt(&self, error: &serde_json::Error) -> Result<(), StoreError> {
        let mut backup = self.path.clone().into_os_string();
        backup.push(".corrupt");
        warn!(
            "Progress file {} is not valid JSON ({error}), moving it to {}",
            self.path.display(),
            Path::new(&backup).display()
        );
        fs::rename(&self.path, &backup)?;
        Ok(())
    }
}

impl CompletionStore for JsonFileStore {
    fn get(&self, date: &str) -> Result<Option<CompletionRecord>, StoreError> {
        Ok(self.read_all()?.remove(date))
    }

    fn set(&mut self, record: CompletionRecord) -> Result<(), StoreError> {
        let mut records = match self.read_all() {
            Ok(records) => records,
            Err(StoreError::Format(e)) => {
                self.set_aside_corrupt(&e)?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        records.insert(record.date.clone(), record);

        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &records)?;
        writer.flush()?;
        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, CrosswordData, Direction, Position};
    use crate::session::CompletionResult;
    use tempfile::tempdir;

    fn record(date: &str, result: CompletionResult) -> CompletionRecord {
        let puzzle = CrosswordData::from_answers(
            7,
            1,
            4,
            vec![Answer::new(Direction::Across, Position::new(0, 0), "KOPI")],
        )
        .unwrap();
        CompletionRecord {
            date: date.to_string(),
            result,
            puzzle,
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("2025-11-03").unwrap().is_none());

        store.set(record("2025-11-03", CompletionResult::Perfect)).unwrap();
        let loaded = store.get("2025-11-03").unwrap().unwrap();
        assert_eq!(loaded.result, CompletionResult::Perfect);
        assert!(store.get("2025-11-04").unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("progress.json"));
        assert!(store.get("2025-11-03").unwrap().is_none());
    }

    #[test]
    fn json_store_keeps_records_per_date() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");

        let mut store = JsonFileStore::new(&path);
        store.set(record("2025-11-03", CompletionResult::Partial)).unwrap();
        store.set(record("2025-11-04", CompletionResult::AllWrong)).unwrap();

        // A fresh handle sees what the first one wrote
        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.get("2025-11-03").unwrap().unwrap().result,
            CompletionResult::Partial
        );
        assert_eq!(
            reopened.get("2025-11-04").unwrap().unwrap(),
            record("2025-11-04", CompletionResult::AllWrong)
        );
    }

    #[test]
    fn json_store_reports_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.get("2025-11-03"), Err(StoreError::Format(_))));
    }

    #[test]
    fn json_store_recovers_from_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.json");
        std::fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::new(&path);
        store.set(record("2025-11-03", CompletionResult::Perfect)).unwrap();

        assert_eq!(
            store.get("2025-11-03").unwrap(),
            Some(record("2025-11-03", CompletionResult::Perfect))
        );
        let backup = dir.path().join("progress.json.corrupt");
        assert_eq!(std::fs::read_to_string(backup).unwrap(), "not json");
    }

    #[test]
    fn mutable_reference_is_a_store() {
        fn save<S: CompletionStore>(mut store: S) {
            store.set(record("2025-11-03", CompletionResult::Perfect)).unwrap();
        }

        let mut store = MemoryStore::new();
        save(&mut store);
        assert_eq!(store.len(), 1);
    }
}
