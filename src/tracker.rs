//! Reconciliation of the goal list against the metadata store
//!
//! Every request runs a plain read-modify-write of the metadata document
//! with no locking. Two overlapping requests can each load the same
//! snapshot and the later save wins, losing the earlier toggle. The
//! tracker is meant for one person on one machine, so this is accepted.

use crate::error::Result;
use crate::goals::{CompletionStamp, GoalFormat, GoalMetadata, GoalReader};
use crate::storage::MetadataStore;
use chrono::{DateTime, Local, TimeZone};
use std::collections::HashSet;
use std::fmt::Display;

/// Everything the index page needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalOverview {
    /// Category names in file order (empty in flat format)
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    /// Goals of the selected category, or all goals in flat format
    pub goals: Vec<String>,
    pub metadata: Vec<GoalMetadata>,
}

impl GoalOverview {
    pub fn metadata_for(&self, goal: &str) -> Option<&GoalMetadata> {
        self.metadata.iter().find(|m| m.goal == goal)
    }
}

pub struct GoalTracker<S> {
    reader: GoalReader,
    store: S,
    format: GoalFormat,
}

impl<S: MetadataStore> GoalTracker<S> {
    pub fn new(reader: GoalReader, store: S, format: GoalFormat) -> Self {
        Self {
            reader,
            store,
            format,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn format(&self) -> GoalFormat {
        self.format
    }

    /// Append a pending record for every goal that has none yet, then save
    ///
    /// Records whose goal has left the goal list are kept. The full list is
    /// always written back, so a second run rewrites identical content.
    pub fn reconcile(&self) -> Result<Vec<GoalMetadata>> {
        let goals = self.reader.read_all(self.format)?;
        let mut records = self.store.load()?;
        let mut known: HashSet<String> = records.iter().map(|r| r.goal.clone()).collect();

        let before = records.len();
        for goal in goals {
            if known.insert(goal.clone()) {
                records.push(GoalMetadata::pending(goal));
            }
        }

        let added = records.len() - before;
        if added > 0 {
            tracing::info!(added, "added metadata for new goals");
        }

        self.store.save(&records)?;
        Ok(records)
    }

    /// Toggle completion of `goal` using the current local time
    pub fn toggle_completion(&self, goal: &str) -> Result<Vec<GoalMetadata>> {
        self.toggle_completion_at(goal, &Local::now())
    }

    /// Toggle completion of `goal`, stamping completions with `now`
    ///
    /// Returns the toggled records. Every record with this exact goal text
    /// is toggled; an unknown goal toggles nothing and leaves the store
    /// untouched.
    pub fn toggle_completion_at<Tz>(
        &self,
        goal: &str,
        now: &DateTime<Tz>,
    ) -> Result<Vec<GoalMetadata>>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let stamp = CompletionStamp::from_datetime(now);
        let mut records = self.store.load()?;

        let mut toggled = Vec::new();
        for record in records.iter_mut().filter(|r| r.goal == goal) {
            record.toggle(&stamp);
            toggled.push(record.clone());
        }

        if toggled.is_empty() {
            tracing::debug!(goal, "toggle requested for unknown goal");
            return Ok(toggled);
        }
        if toggled.len() > 1 {
            tracing::warn!(goal, count = toggled.len(), "goal has duplicate metadata records");
        }

        self.store.save(&records)?;
        tracing::info!(goal, completed = toggled[0].completed, "toggled goal");
        Ok(toggled)
    }

    /// Reconcile, then collect the goals of `category` for display
    ///
    /// An absent or empty `category` selects the first category.
    pub fn overview(&self, category: Option<&str>) -> Result<GoalOverview> {
        let metadata = self.reconcile()?;

        match self.format {
            GoalFormat::flat => Ok(GoalOverview {
                categories: Vec::new(),
                selected_category: None,
                goals: self.reader.read_goals()?,
                metadata,
            }),
            GoalFormat::categorized => {
                let goals_by_cat = self.reader.read_goals_by_category()?;
                let categories: Vec<String> = goals_by_cat.keys().cloned().collect();
                let selected_category = category
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
                    .or_else(|| categories.first().cloned());
                let goals = selected_category
                    .as_ref()
                    .and_then(|c| goals_by_cat.get(c))
                    .cloned()
                    .unwrap_or_default();

                Ok(GoalOverview {
                    categories,
                    selected_category,
                    goals,
                    metadata,
                })
            }
        }
    }
}
