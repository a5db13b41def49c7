//! Durable wire form of a schedule.
//!
//! A snapshot is written as one JSON document. Two historical entry shapes
//! are accepted on read: a bare title string (the original title-only
//! format) and a `{title, code}` record. Writes always use the record form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ChosenItem, ScheduleOption};

/// Version stamped on every snapshot this crate writes.
pub const SNAPSHOT_VERSION: u32 = 2;

/// Snapshots without a version field predate structured entries.
fn legacy_version() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(default = "legacy_version")]
    pub version: u32,
    #[serde(default)]
    pub options: BTreeMap<String, Vec<StoredEntry>>,
    #[serde(default)]
    pub chosen: BTreeMap<String, StoredEntry>,
}

impl Default for ScheduleSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            options: BTreeMap::new(),
            chosen: BTreeMap::new(),
        }
    }
}

impl ScheduleSnapshot {
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.chosen.is_empty()
    }
}

/// One stored option or chosen entry, in any shape seen in the wild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    /// Title-only entry written by the first release.
    Legacy(String),
    Record {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        code: Option<String>,
    },
    /// Anything else (numbers, arrays, ...). Ignored on load.
    Unrecognized(serde_json::Value),
}

impl StoredEntry {
    pub fn record(title: impl Into<String>, code: impl Into<String>) -> Self {
        StoredEntry::Record {
            title: Some(title.into()),
            code: Some(code.into()),
        }
    }

    /// Normalizes the entry to `(title, code)`; a bare string becomes a
    /// title with an empty code. Returns `None` for unrecognized shapes.
    pub fn normalize(&self) -> Option<(String, String)> {
        match self {
            StoredEntry::Legacy(title) => Some((title.clone(), String::new())),
            StoredEntry::Record { title, code } => Some((
                title.clone().unwrap_or_default(),
                code.clone().unwrap_or_default(),
            )),
            StoredEntry::Unrecognized(_) => None,
        }
    }
}

impl From<&ScheduleOption> for StoredEntry {
    fn from(option: &ScheduleOption) -> Self {
        StoredEntry::record(option.title.clone(), option.code.clone())
    }
}

impl From<&ChosenItem> for StoredEntry {
    fn from(item: &ChosenItem) -> Self {
        StoredEntry::record(item.title.clone(), item.code.clone())
    }
}
