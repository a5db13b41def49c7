use anyhow::{Context, Result};

use crate::models::schedule::ScheduleSnapshot;
use crate::services::storage::{KeyValueStore, SCHEDULE_STORAGE_KEY};

/// Reads the stored snapshot.
///
/// A missing value, a failed read and an unparsable document all mean
/// "no data": the caller starts from an empty schedule.
pub fn load_snapshot(store: &dyn KeyValueStore) -> Option<ScheduleSnapshot> {
    let data = match store.get_item(SCHEDULE_STORAGE_KEY) {
        Ok(Some(data)) => data,
        Ok(None) => return None,
        Err(err) => {
            log::error!("Failed to read stored schedule: {:#}", err);
            return None;
        }
    };

    match ScheduleSnapshot::from_json(&data) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            log::warn!("Ignoring corrupted schedule snapshot: {}", err);
            None
        }
    }
}

/// Overwrites the stored snapshot.
pub fn save_snapshot(store: &dyn KeyValueStore, snapshot: &ScheduleSnapshot) -> Result<()> {
    let data = snapshot
        .to_json()
        .context("failed to serialize schedule snapshot")?;
    store
        .set_item(SCHEDULE_STORAGE_KEY, &data)
        .context("failed to persist schedule snapshot")
}
