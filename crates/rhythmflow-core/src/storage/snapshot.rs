//! Persistence port for the day schedule snapshot.
//!
//! The schedule is stored as a single JSON document under one well-known
//! key and fully overwritten on every save. [`JsonFileStore`] keeps it on
//! disk; [`MemoryStore`] keeps it in a key/value map and is what tests use.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::schedule::DaySchedule;

/// Key the snapshot is stored under.
pub const SNAPSHOT_KEY: &str = "daySchedule";

/// Load/save access to the persisted schedule.
pub trait SnapshotStore {
    /// Read the stored snapshot. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<DaySchedule>, StorageError>;

    /// Overwrite the stored snapshot.
    fn save(&mut self, schedule: &DaySchedule) -> Result<(), StorageError>;
}

/// Snapshot stored as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<dir>/daySchedule.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(format!("{SNAPSHOT_KEY}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Result<Option<DaySchedule>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(StorageError::Decode)
    }

    fn save(&mut self, schedule: &DaySchedule) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(schedule).map_err(StorageError::Encode)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory key/value snapshot store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    read_only: bool,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `schedule`.
    pub fn with_snapshot(schedule: &DaySchedule) -> Result<Self, StorageError> {
        let mut store = Self::new();
        store.save(schedule)?;
        store.saves = 0;
        Ok(store)
    }

    /// Make every save fail, like a full or unavailable backend.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Raw stored JSON, if any.
    pub fn raw(&self) -> Option<&str> {
        self.entries.get(SNAPSHOT_KEY).map(String::as_str)
    }

    /// Put raw text under the snapshot key.
    pub fn put_raw(&mut self, value: impl Into<String>) {
        self.entries.insert(SNAPSHOT_KEY.to_string(), value.into());
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<DaySchedule>, StorageError> {
        self.raw()
            .map(|raw| serde_json::from_str(raw).map_err(StorageError::Decode))
            .transpose()
    }

    fn save(&mut self, schedule: &DaySchedule) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        let json = serde_json::to_string(schedule).map_err(StorageError::Encode)?;
        self.entries.insert(SNAPSHOT_KEY.to_string(), json);
        self.saves += 1;
        Ok(())
    }
}
