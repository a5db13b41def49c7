// Vocabulary module
// Fixed day and hour labels that define the addressable slot space

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::schedule::{ScheduleError, SlotKey};

/// Ordered day and hour labels shared by both grids.
///
/// Changing either list changes the key space: snapshot entries stored
/// under labels that are no longer present are dropped on the next load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub days: Vec<String>,
    pub hours: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(
            ["شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه"],
            ["۰۷:۳۰", "۰۹:۰۰", "۱۰:۳۰", "۱۳:۳۰", "۱۵:۰۰", "۱۷:۰۰"],
        )
    }
}

impl Vocabulary {
    pub fn new<D, H>(days: D, hours: H) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        H: IntoIterator,
        H::Item: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            hours: hours.into_iter().map(Into::into).collect(),
        }
    }

    /// Every slot key in row-major order (day, then hour).
    pub fn slot_keys(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.days.iter().flat_map(move |day| {
            self.hours
                .iter()
                .map(move |hour| SlotKey::new(day.clone(), hour.clone()))
        })
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.days.iter().any(|d| *d == key.day) && self.hours.iter().any(|h| *h == key.hour)
    }

    pub fn slot_count(&self) -> usize {
        self.days.len() * self.hours.len()
    }

    /// Rejects vocabularies that would produce an empty grid or two cells
    /// sharing a key.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        Self::validate_labels("days", &self.days)?;
        Self::validate_labels("hours", &self.hours)?;

        // Labels containing '-' can make two different slots serialize
        // to the same storage key.
        let mut keys = HashSet::new();
        for key in self.slot_keys() {
            let storage_key = key.storage_key();
            if !keys.insert(storage_key.clone()) {
                return Err(ScheduleError::InvalidVocabulary(format!(
                    "slot key '{}' is ambiguous",
                    storage_key
                )));
            }
        }

        Ok(())
    }

    fn validate_labels(kind: &str, labels: &[String]) -> Result<(), ScheduleError> {
        if labels.is_empty() {
            return Err(ScheduleError::InvalidVocabulary(format!(
                "{} list must not be empty",
                kind
            )));
        }

        let mut seen = HashSet::new();
        for label in labels {
            if label.trim().is_empty() {
                return Err(ScheduleError::InvalidVocabulary(format!(
                    "{} list contains a blank label",
                    kind
                )));
            }
            if !seen.insert(label.as_str()) {
                return Err(ScheduleError::InvalidVocabulary(format!(
                    "duplicate label '{}' in {} list",
                    label, kind
                )));
            }
        }

        Ok(())
    }
}
