use anyhow::Result;

use super::persistence::{load_snapshot, save_snapshot};
use crate::models::schedule::{ChosenItem, Schedule, ScheduleCommand, SlotKey};
use crate::models::vocabulary::Vocabulary;
use crate::services::storage::KeyValueStore;

/// Keeps the in-memory schedule and its stored mirror in step.
///
/// Every change goes through [`ScheduleService::apply`], which writes the
/// full snapshot before returning. If the write fails the change is rolled
/// back, so storage never lags the model between events.
pub struct ScheduleService<'a> {
    store: &'a dyn KeyValueStore,
    schedule: Schedule,
}

impl<'a> ScheduleService<'a> {
    /// Loads the stored schedule for `vocabulary`. Never fails: missing or
    /// unreadable data yields an empty schedule.
    pub fn load(store: &'a dyn KeyValueStore, vocabulary: Vocabulary) -> Self {
        let schedule = Self::read_schedule(store, vocabulary);
        log::info!(
            "Loaded schedule: {} option(s), {} chosen",
            schedule.option_count(),
            schedule.chosen_count()
        );
        Self { store, schedule }
    }

    fn read_schedule(store: &dyn KeyValueStore, vocabulary: Vocabulary) -> Schedule {
        match load_snapshot(store) {
            Some(snapshot) => Schedule::from_snapshot(vocabulary, &snapshot),
            None => Schedule::new(vocabulary),
        }
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Serializes the whole schedule over the previous stored value.
    pub fn save(&self) -> Result<()> {
        save_snapshot(self.store, &self.schedule.to_snapshot())
    }

    /// Discards the in-memory state and reloads it from storage.
    pub fn reload(&mut self) {
        let vocabulary = self.schedule.vocabulary().clone();
        self.schedule = Self::read_schedule(self.store, vocabulary);
    }

    /// Applies one command and persists the result. Returns whether the
    /// schedule changed; commands that change nothing skip the write.
    pub fn apply(&mut self, command: ScheduleCommand) -> Result<bool> {
        let before = self.schedule.clone();

        let changed = self.schedule.apply(&command)?;
        if !changed {
            log::debug!("{} on {} changed nothing", command.name(), command.key());
            return Ok(false);
        }

        if let Err(err) = self.save() {
            self.schedule = before;
            return Err(err);
        }

        log::debug!("{} on {} saved", command.name(), command.key());
        Ok(true)
    }

    pub fn add_option(&mut self, key: &SlotKey, title: &str, code: &str) -> Result<bool> {
        self.apply(ScheduleCommand::AddOption {
            key: key.clone(),
            title: title.to_string(),
            code: code.to_string(),
        })
    }

    pub fn promote(&mut self, key: &SlotKey, index: usize) -> Result<bool> {
        self.apply(ScheduleCommand::Promote {
            key: key.clone(),
            index,
        })
    }

    pub fn remove_option(&mut self, key: &SlotKey, index: usize) -> Result<bool> {
        self.apply(ScheduleCommand::RemoveOption {
            key: key.clone(),
            index,
        })
    }

    pub fn set_chosen(&mut self, key: &SlotKey, item: ChosenItem) -> Result<bool> {
        self.apply(ScheduleCommand::SetChosen {
            key: key.clone(),
            item,
        })
    }

    pub fn clear_chosen(&mut self, key: &SlotKey) -> Result<bool> {
        self.apply(ScheduleCommand::ClearChosen { key: key.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::{ScheduleError, ScheduleSnapshot};
    use crate::services::database::Database;
    use crate::services::storage::{MemoryStore, MockKeyValueStore, SCHEDULE_STORAGE_KEY};
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn vocab() -> Vocabulary {
        Vocabulary::new(["day1", "day2"], ["hour1", "hour2"])
    }

    fn key() -> SlotKey {
        SlotKey::new("day1", "hour1")
    }

    fn stored(store: &dyn KeyValueStore) -> serde_json::Value {
        let data = store.get_item(SCHEDULE_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&data).unwrap()
    }

    #[test]
    fn test_add_promote_delete_scenario() {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        let mut service = ScheduleService::load(&db, vocab());

        assert!(service.add_option(&key(), "Math", "201").unwrap());
        let json = stored(&db);
        assert_eq!(
            json["options"]["day1-hour1"],
            serde_json::json!([{"title": "Math", "code": "201"}])
        );

        assert!(service.promote(&key(), 0).unwrap());
        let json = stored(&db);
        assert_eq!(
            json["chosen"]["day1-hour1"],
            serde_json::json!({"title": "Math", "code": "201"})
        );
        assert_eq!(
            json["options"]["day1-hour1"],
            serde_json::json!([{"title": "Math", "code": "201"}])
        );

        assert!(service.clear_chosen(&key()).unwrap());
        let json = stored(&db);
        assert!(json["chosen"].get("day1-hour1").is_none());
        assert_eq!(
            json["options"]["day1-hour1"],
            serde_json::json!([{"title": "Math", "code": "201"}])
        );
    }

    #[test]
    fn test_empty_title_changes_nothing() {
        let store = MemoryStore::new();
        let mut service = ScheduleService::load(&store, vocab());

        let err = service.add_option(&key(), "", "101").unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScheduleError>(),
            Some(&ScheduleError::EmptyTitle)
        );
        assert!(service.schedule().is_empty());
        assert_eq!(store.get_item(SCHEDULE_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_noop_commands_skip_write() {
        let mut store = MockKeyValueStore::new();
        store.expect_get_item().returning(|_| Ok(None));
        store.expect_set_item().never();

        let mut service = ScheduleService::load(&store, vocab());
        assert!(!service.promote(&key(), 3).unwrap());
        assert!(!service.remove_option(&key(), 0).unwrap());
        assert!(!service.clear_chosen(&SlotKey::new("Friday", "18:00")).unwrap());
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut store = MockKeyValueStore::new();
        store.expect_get_item().returning(|_| Ok(None));
        store
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(anyhow!("read-only")));

        let mut service = ScheduleService::load(&store, vocab());
        assert!(service.add_option(&key(), "Math", "201").is_err());
        assert!(service.schedule().is_empty());
    }

    #[test]
    fn test_legacy_storage_is_migrated_on_next_write() {
        let store = MemoryStore::with_item(
            SCHEDULE_STORAGE_KEY,
            r#"{"options":{"day1-hour1":["Algebra"]},"chosen":{"day1-hour1":"Algebra"}}"#,
        );
        let mut service = ScheduleService::load(&store, vocab());
        assert_eq!(
            service.schedule().chosen_at(&key()),
            Some(&ChosenItem::new("Algebra", ""))
        );

        service.add_option(&key(), "Geometry", "").unwrap();
        let snapshot =
            ScheduleSnapshot::from_json(&store.get_item(SCHEDULE_STORAGE_KEY).unwrap().unwrap())
                .unwrap();
        assert_eq!(snapshot.version, 2);
        assert_eq!(
            stored(&store)["options"]["day1-hour1"],
            serde_json::json!([
                {"title": "Algebra", "code": ""},
                {"title": "Geometry", "code": ""}
            ])
        );
    }

    #[test]
    fn test_reload_discards_unsaved_model() {
        let store = MemoryStore::new();
        let mut service = ScheduleService::load(&store, vocab());
        service.add_option(&key(), "Math", "201").unwrap();
        let before = service.schedule().clone();

        service.reload();
        assert_eq!(service.schedule(), &before);
    }
}
