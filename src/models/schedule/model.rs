use std::collections::HashMap;

use super::snapshot::{ScheduleSnapshot, StoredEntry, SNAPSHOT_VERSION};
use super::{ChosenItem, ScheduleCommand, ScheduleError, ScheduleOption, SlotKey};
use crate::models::vocabulary::Vocabulary;

/// The live schedule: options per slot plus at most one chosen item per slot.
///
/// This is the single source of truth. Grids are projections of it and
/// storage is a mirror written after every change.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    vocabulary: Vocabulary,
    options: HashMap<SlotKey, Vec<ScheduleOption>>,
    chosen: HashMap<SlotKey, ChosenItem>,
}

impl Schedule {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            options: HashMap::new(),
            chosen: HashMap::new(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Options for a slot in insertion order.
    pub fn options_at(&self, key: &SlotKey) -> &[ScheduleOption] {
        self.options.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn chosen_at(&self, key: &SlotKey) -> Option<&ChosenItem> {
        self.chosen.get(key)
    }

    pub fn option_count(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }

    pub fn chosen_count(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.chosen.is_empty()
    }

    fn ensure_slot(&self, key: &SlotKey) -> Result<(), ScheduleError> {
        if self.vocabulary.contains(key) {
            Ok(())
        } else {
            Err(ScheduleError::UnknownSlot(key.storage_key()))
        }
    }

    /// Appends an option to a slot. No upper bound, duplicates allowed.
    pub fn add_option(&mut self, key: &SlotKey, option: ScheduleOption) -> Result<(), ScheduleError> {
        self.ensure_slot(key)?;
        self.options.entry(key.clone()).or_default().push(option);
        Ok(())
    }

    /// Removes the option at `index`. The chosen grid is left alone even if
    /// the removed option had been promoted.
    pub fn remove_option(&mut self, key: &SlotKey, index: usize) -> Option<ScheduleOption> {
        let list = self.options.get_mut(key)?;
        if index >= list.len() {
            return None;
        }

        let removed = list.remove(index);
        if list.is_empty() {
            self.options.remove(key);
        }
        Some(removed)
    }

    /// Copies the option at `index` into the chosen slot with the same key,
    /// replacing whatever was chosen there. Returns `false` when there is
    /// no such option or no matching chosen slot.
    pub fn promote(&mut self, key: &SlotKey, index: usize) -> bool {
        if !self.vocabulary.contains(key) {
            return false;
        }

        let Some(option) = self.options_at(key).get(index) else {
            return false;
        };

        let item = ChosenItem::from(option);
        self.chosen.insert(key.clone(), item);
        true
    }

    /// Installs `item` as the slot's chosen entry. An item with neither a
    /// title nor a code leaves the slot empty.
    pub fn set_chosen(&mut self, key: &SlotKey, item: ChosenItem) -> Result<(), ScheduleError> {
        self.ensure_slot(key)?;
        if item.is_empty() {
            self.chosen.remove(key);
        } else {
            self.chosen.insert(key.clone(), item);
        }
        Ok(())
    }

    pub fn clear_chosen(&mut self, key: &SlotKey) -> Option<ChosenItem> {
        self.chosen.remove(key)
    }

    /// Runs one command against the model and reports whether it changed.
    pub fn apply(&mut self, command: &ScheduleCommand) -> Result<bool, ScheduleError> {
        match command {
            ScheduleCommand::AddOption { key, title, code } => {
                let option = ScheduleOption::new(title, code)?;
                self.add_option(key, option)?;
                Ok(true)
            }
            ScheduleCommand::Promote { key, index } => {
                let previous = self.chosen.get(key).cloned();
                if !self.promote(key, *index) {
                    return Ok(false);
                }
                Ok(previous.as_ref() != self.chosen.get(key))
            }
            ScheduleCommand::RemoveOption { key, index } => {
                Ok(self.remove_option(key, *index).is_some())
            }
            ScheduleCommand::SetChosen { key, item } => {
                let previous = self.chosen.get(key).cloned();
                self.set_chosen(key, item.clone())?;
                Ok(previous.as_ref() != self.chosen.get(key))
            }
            ScheduleCommand::ClearChosen { key } => Ok(self.clear_chosen(key).is_some()),
        }
    }

    /// Builds the durable snapshot. Slots without options are omitted
    /// rather than stored as empty lists.
    pub fn to_snapshot(&self) -> ScheduleSnapshot {
        let mut snapshot = ScheduleSnapshot {
            version: SNAPSHOT_VERSION,
            ..ScheduleSnapshot::default()
        };

        for key in self.vocabulary.slot_keys() {
            let options = self.options_at(&key);
            if !options.is_empty() {
                snapshot
                    .options
                    .insert(key.storage_key(), options.iter().map(StoredEntry::from).collect());
            }

            if let Some(item) = self.chosen.get(&key).filter(|item| !item.is_empty()) {
                snapshot.chosen.insert(key.storage_key(), StoredEntry::from(item));
            }
        }

        snapshot
    }

    /// Rebuilds a schedule from a snapshot for the given vocabulary.
    ///
    /// Legacy entries are normalized, options without a title and blank
    /// chosen entries are skipped, and keys outside the vocabulary are
    /// dropped.
    pub fn from_snapshot(vocabulary: Vocabulary, snapshot: &ScheduleSnapshot) -> Self {
        let mut schedule = Self::new(vocabulary);
        let mut matched = 0usize;

        let keys: Vec<SlotKey> = schedule.vocabulary.slot_keys().collect();
        for key in keys {
            let storage_key = key.storage_key();

            if let Some(entries) = snapshot.options.get(&storage_key) {
                matched += 1;
                let options: Vec<ScheduleOption> = entries
                    .iter()
                    .filter_map(StoredEntry::normalize)
                    .filter(|(title, _)| !title.trim().is_empty())
                    .map(|(title, code)| ScheduleOption { title, code })
                    .collect();
                if options.len() != entries.len() {
                    log::warn!(
                        "Skipped {} unreadable option(s) stored under '{}'",
                        entries.len() - options.len(),
                        storage_key
                    );
                }
                if !options.is_empty() {
                    schedule.options.insert(key.clone(), options);
                }
            }

            if let Some(entry) = snapshot.chosen.get(&storage_key) {
                matched += 1;
                match entry.normalize() {
                    Some((title, code)) => {
                        let item = ChosenItem::new(title, code);
                        if !item.is_empty() {
                            schedule.chosen.insert(key, item);
                        }
                    }
                    None => log::warn!("Skipped unreadable chosen entry under '{}'", storage_key),
                }
            }
        }

        let stored = snapshot.options.len() + snapshot.chosen.len();
        if stored > matched {
            log::info!(
                "Dropped {} stored slot(s) that are not part of the configured week",
                stored - matched
            );
        }

        schedule
    }
}
