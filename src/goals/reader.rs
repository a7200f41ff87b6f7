use crate::error::{Result, TrackerError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Goals grouped by category, in the order categories first appear
pub type GoalsByCategory = IndexMap<String, Vec<String>>;

/// Layout of the goal list file
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum GoalFormat {
    /// One goal per line, no headers
    flat,
    /// Goals grouped under `[Category]` header lines
    #[default]
    categorized,
}

/// Parse a flat goal list: trimmed, non-blank lines in file order
pub fn parse_goals(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a categorized goal list
///
/// A trimmed line of the form `[Name]` opens (or reopens) category `Name`.
/// Lines before the first header belong to no category and are dropped,
/// as are lines under an empty `[]` header (the category itself is kept).
pub fn parse_goals_by_category(text: &str) -> GoalsByCategory {
    let mut goals_by_cat = GoalsByCategory::new();
    let mut current: Option<String> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(name) = header_name(line) {
            goals_by_cat.entry(name.to_string()).or_default();
            current = (!name.is_empty()).then(|| name.to_string());
        } else if let Some(cat) = &current {
            // The entry was created when the header was seen
            if let Some(goals) = goals_by_cat.get_mut(cat) {
                goals.push(line.to_string());
            }
        }
    }

    goals_by_cat
}

fn header_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

/// Reads goals from the plain-text goal list file
#[derive(Debug, Clone)]
pub struct GoalReader {
    path: PathBuf,
}

impl GoalReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All goals in flat mode; a missing file yields no goals
    pub fn read_goals(&self) -> Result<Vec<String>> {
        Ok(self.read_text()?.as_deref().map(parse_goals).unwrap_or_default())
    }

    /// Goals grouped by category; a missing file yields no categories
    pub fn read_goals_by_category(&self) -> Result<GoalsByCategory> {
        Ok(self
            .read_text()?
            .as_deref()
            .map(parse_goals_by_category)
            .unwrap_or_default())
    }

    /// Every goal known to the given format, in encounter order
    ///
    /// In categorized format this flattens the category map, so goals
    /// listed before the first header are not included.
    pub fn read_all(&self, format: GoalFormat) -> Result<Vec<String>> {
        match format {
            GoalFormat::flat => self.read_goals(),
            GoalFormat::categorized => Ok(self
                .read_goals_by_category()?
                .into_values()
                .flatten()
                .collect()),
        }
    }

    fn read_text(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::io(&self.path, e)),
        }
    }
}
