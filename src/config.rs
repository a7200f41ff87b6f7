//! Runtime configuration
//!
//! Settings come from an optional TOML file; command-line flags override it.

use crate::goals::GoalFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Plain-text goal list
    pub goals_file: PathBuf,
    /// JSON metadata document
    pub metadata_file: PathBuf,
    /// Address to listen on, e.g. `127.0.0.1:5000`
    pub listen: String,
    /// Layout of the goal list file
    pub format: GoalFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            goals_file: PathBuf::from("lifeGoals.txt"),
            metadata_file: PathBuf::from("lifeGoals_metadata.json"),
            listen: "127.0.0.1:5000".to_string(),
            format: GoalFormat::categorized,
        }
    }
}

impl Config {
    /// Load a TOML config file; missing keys take their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if given (defaults otherwise), then apply `overrides`
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(overrides))
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(goals_file) = overrides.goals_file {
            self.goals_file = goals_file;
        }
        if let Some(metadata_file) = overrides.metadata_file {
            self.metadata_file = metadata_file;
        }
        if let Some(listen) = overrides.listen {
            self.listen = listen;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}

/// Settings given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub goals_file: Option<PathBuf>,
    pub metadata_file: Option<PathBuf>,
    pub listen: Option<String>,
    pub format: Option<GoalFormat>,
}
