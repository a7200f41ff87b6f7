//! Life Goals Tracker Library
//!
//! A single-user tracker for life goals served over a local web page.
//! Goals are listed in a plain-text file, optionally grouped under
//! `[Category]` header lines; completion state lives in a separate JSON
//! metadata file keyed by the goal text.
//!
//! # Architecture
//!
//! - **HTTP Layer**: `handlers` - axum routes calling into `GoalServer`
//! - **Domain Layer**: `goals` and `tracker` - goal list parsing and metadata reconciliation
//! - **Persistence Layer**: `storage` - JSON metadata store (file-backed or in-memory)
//!
//! # Example
//!
//! ```no_run
//! use life_goals::{GoalFormat, GoalServer};
//!
//! # fn main() -> Result<(), life_goals::TrackerError> {
//! let server = GoalServer::open(
//!     "lifeGoals.txt",
//!     "lifeGoals_metadata.json",
//!     GoalFormat::categorized,
//! );
//! let page = server.handle_index(None)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
pub mod goals;
pub mod handlers;
pub mod storage;
pub mod tracker;

use std::path::Path;

pub use config::{Config, ConfigOverrides};
pub use error::TrackerError;
pub use goals::{GoalFormat, GoalMetadata, GoalReader};
pub use handlers::router;
pub use storage::{JsonFileStore, MemoryStore, MetadataStore};
pub use tracker::{GoalOverview, GoalTracker};

/// Goal tracker server state shared by all HTTP handlers
pub struct GoalServer<S = JsonFileStore> {
    pub(crate) tracker: GoalTracker<S>,
}

impl GoalServer<JsonFileStore> {
    /// Create a server backed by the goal list and metadata files
    ///
    /// Neither file has to exist yet: a missing goal list reads as empty
    /// and the metadata file is created on first use.
    pub fn open(
        goals_file: impl AsRef<Path>,
        metadata_file: impl AsRef<Path>,
        format: GoalFormat,
    ) -> Self {
        Self::with_store(
            GoalReader::new(goals_file),
            JsonFileStore::new(metadata_file),
            format,
        )
    }

    pub fn from_config(config: &Config) -> Self {
        Self::open(&config.goals_file, &config.metadata_file, config.format)
    }
}

impl<S: MetadataStore> GoalServer<S> {
    pub fn with_store(reader: GoalReader, store: S, format: GoalFormat) -> Self {
        Self {
            tracker: GoalTracker::new(reader, store, format),
        }
    }

    pub fn tracker(&self) -> &GoalTracker<S> {
        &self.tracker
    }
}
