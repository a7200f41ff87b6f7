use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Completion state of a single goal
///
/// The goal text is the key. A completed record carries all three of
/// `date` (`DD/MM/YYYY`), `time` (`HH:MM:SS`) and `timezone` (`±HH:MM`);
/// a pending record carries none of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GoalMetadata {
    pub goal: String,
    pub completed: bool,
    pub date: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
}

impl GoalMetadata {
    /// A fresh, not-yet-completed record
    pub fn pending(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            completed: false,
            date: None,
            time: None,
            timezone: None,
        }
    }

    pub fn is_consistent(&self) -> bool {
        let stamped = [&self.date, &self.time, &self.timezone];
        if self.completed {
            stamped.iter().all(|f| f.is_some())
        } else {
            stamped.iter().all(|f| f.is_none())
        }
    }

    /// Flip completion: clear the stamp if completed, otherwise stamp with `stamp`
    pub fn toggle(&mut self, stamp: &CompletionStamp) {
        if self.completed {
            self.completed = false;
            self.date = None;
            self.time = None;
            self.timezone = None;
        } else {
            self.completed = true;
            self.date = Some(stamp.date.clone());
            self.time = Some(stamp.time.clone());
            self.timezone = Some(stamp.timezone.clone());
        }
    }
}

/// Wall-clock moment a goal was marked complete, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionStamp {
    pub date: String,
    pub time: String,
    pub timezone: String,
}

impl CompletionStamp {
    pub fn from_datetime<Tz>(now: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            date: now.format("%d/%m/%Y").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            timezone: normalize_offset(&now.format("%z").to_string()),
        }
    }
}

/// Insert the colon into a raw `+HHMM`/`-HHMM` offset
///
/// Anything that is not exactly a sign followed by four digits is returned
/// unchanged, so an offset that already reads `+HH:MM` passes through.
pub fn normalize_offset(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let is_raw = bytes.len() == 5
        && matches!(bytes[0], b'+' | b'-')
        && bytes[1..].iter().all(u8::is_ascii_digit);
    if is_raw {
        format!("{}:{}", &raw[..3], &raw[3..])
    } else {
        raw.to_string()
    }
}
