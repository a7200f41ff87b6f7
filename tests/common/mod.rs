//! Common test utilities for integration tests

#![allow(dead_code)]

use life_goals::{GoalFormat, GoalServer, JsonFileStore};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch directory holding a goal list and its metadata file
pub struct TestFiles {
    pub dir: TempDir,
}

impl TestFiles {
    pub fn new(goals: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("goals.txt"), goals).unwrap();
        Self { dir }
    }

    pub fn goals_path(&self) -> PathBuf {
        self.dir.path().join("goals.txt")
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.path().join("goals_metadata.json")
    }

    pub fn metadata(&self) -> String {
        fs::read_to_string(self.metadata_path()).unwrap()
    }

    pub fn write_goals(&self, goals: &str) {
        fs::write(self.goals_path(), goals).unwrap();
    }

    pub fn server(&self) -> GoalServer<JsonFileStore> {
        GoalServer::open(self.goals_path(), self.metadata_path(), GoalFormat::categorized)
    }
}
