//! Persistence for goal metadata
//!
//! The metadata document is a JSON array of `GoalMetadata` objects,
//! pretty-printed with a 2-space indent and rewritten in full on every save.

use crate::error::{Result, TrackerError};
use crate::goals::GoalMetadata;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Load/save access to the full list of metadata records
pub trait MetadataStore {
    fn load(&self) -> Result<Vec<GoalMetadata>>;
    fn save(&self, records: &[GoalMetadata]) -> Result<()>;
}

pub(crate) fn encode(records: &[GoalMetadata]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Strict decode: shape mismatches and broken completion stamps are fatal
pub(crate) fn decode(content: &str) -> Result<Vec<GoalMetadata>> {
    let records: Vec<GoalMetadata> = serde_json::from_str(content)?;
    if let Some(bad) = records.iter().find(|r| !r.is_consistent()) {
        return Err(TrackerError::InconsistentRecord {
            goal: bad.goal.clone(),
        });
    }
    Ok(records)
}

/// Metadata stored in a JSON file on disk
pub struct JsonFileStore {
    file_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn write(&self, content: &str) -> Result<()> {
        fs::write(&self.file_path, content).map_err(|e| TrackerError::io(&self.file_path, e))
    }
}

impl MetadataStore for JsonFileStore {
    /// Read all records, creating an empty document first if the file is absent
    fn load(&self) -> Result<Vec<GoalMetadata>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.file_path.display(), "creating empty metadata file");
                self.write(&encode(&[])?)?;
                fs::read_to_string(&self.file_path)
                    .map_err(|e| TrackerError::io(&self.file_path, e))?
            }
            Err(e) => return Err(TrackerError::io(&self.file_path, e)),
        };
        decode(&content)
    }

    fn save(&self, records: &[GoalMetadata]) -> Result<()> {
        self.write(&encode(records)?)
    }
}

/// Metadata held in memory, encoded exactly as the file store would write it
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing JSON document
    pub fn with_document(content: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(content.into())),
        }
    }

    /// The current JSON document, if anything has been loaded or saved
    pub fn document(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock only means a panic mid-assignment of a String
        self.document.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MetadataStore for MemoryStore {
    fn load(&self) -> Result<Vec<GoalMetadata>> {
        let mut document = self.lock();
        let content = document.get_or_insert(encode(&[])?);
        decode(content)
    }

    fn save(&self, records: &[GoalMetadata]) -> Result<()> {
        *self.lock() = Some(encode(records)?);
        Ok(())
    }
}
