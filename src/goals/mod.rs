//! Goal domain models
//!
//! - `reader`: parses the plain-text goal list, flat or grouped by `[Category]` headers
//! - `metadata`: the per-goal completion record and its timestamp formatting

mod metadata;
mod reader;

pub use metadata::{CompletionStamp, GoalMetadata, normalize_offset};
pub use reader::{GoalFormat, GoalReader, GoalsByCategory, parse_goals, parse_goals_by_category};
