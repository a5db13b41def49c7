// Schedule module
// Slot keys, option/chosen entries and the in-memory schedule model

mod command;
mod model;
mod snapshot;

pub use command::ScheduleCommand;
pub use model::Schedule;
pub use snapshot::{ScheduleSnapshot, StoredEntry, SNAPSHOT_VERSION};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Shown in place of an empty course code. Never stored.
pub const NO_CODE_PLACEHOLDER: &str = "-";

/// Validation failures raised by schedule operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("option title must not be empty")]
    EmptyTitle,
    #[error("slot '{0}' is not part of the configured week")]
    UnknownSlot(String),
    #[error("invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

/// Composite (day, hour) identifier addressing one cell in either grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotKey {
    pub day: String,
    pub hour: String,
}

impl SlotKey {
    pub fn new(day: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            hour: hour.into(),
        }
    }

    /// Key under which this slot's entries are stored in a snapshot.
    pub fn storage_key(&self) -> String {
        format!("{}-{}", self.day, self.hour)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.hour)
    }
}

/// A candidate course offered for one slot in the options grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOption {
    pub title: String,
    pub code: String,
}

impl ScheduleOption {
    /// Builds an option from raw user input.
    ///
    /// Both fields are trimmed; a title that is empty after trimming is
    /// rejected. The code is optional and may be empty.
    pub fn new(title: &str, code: &str) -> Result<Self, ScheduleError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            code: code.trim().to_string(),
        })
    }

    pub fn display_code(&self) -> &str {
        display_code(&self.code)
    }
}

/// The single entry selected for a slot in the chosen grid.
///
/// Always an independent copy: removing the option it was promoted from
/// leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenItem {
    pub title: String,
    pub code: String,
}

impl ChosenItem {
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.code.is_empty()
    }

    pub fn display_code(&self) -> &str {
        display_code(&self.code)
    }
}

impl From<&ScheduleOption> for ChosenItem {
    fn from(option: &ScheduleOption) -> Self {
        Self::new(option.title.clone(), option.code.clone())
    }
}

fn display_code(code: &str) -> &str {
    if code.is_empty() {
        NO_CODE_PLACEHOLDER
    } else {
        code
    }
}
