// Test fixtures - reusable test data
// Provides consistent schedules and stored documents across test files

#![allow(dead_code)]

use class_schedule::models::schedule::SlotKey;
use class_schedule::models::vocabulary::Vocabulary;
use class_schedule::services::database::Database;
use std::path::Path;

/// Two days by two hours, small enough to reason about by hand.
pub fn small_vocabulary() -> Vocabulary {
    Vocabulary::new(["day1", "day2"], ["hour1", "hour2"])
}

pub fn first_slot() -> SlotKey {
    SlotKey::new("day1", "hour1")
}

/// Opens (or creates) a database file and makes sure the table exists.
pub fn open_database(path: &Path) -> Database {
    let db = Database::new(path.to_str().unwrap()).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

/// Stored documents as older and foreign builds wrote them.
pub mod documents {
    /// Bare strings instead of records, no version field.
    pub const LEGACY: &str = r#"{
        "options": {"day1-hour1": ["Math 201"]},
        "chosen": {"day1-hour1": "Math 201"}
    }"#;

    /// Keys from a different vocabulary next to a valid one.
    pub const FOREIGN_KEYS: &str = r#"{
        "version": 2,
        "options": {
            "Friday-18:00": [{"title": "Yoga", "code": "9"}],
            "day2-hour2": [{"title": "Art", "code": "7"}]
        },
        "chosen": {"Friday-18:00": {"title": "Yoga", "code": "9"}}
    }"#;

    /// Records with missing and blank fields.
    pub const PARTIAL_RECORDS: &str = r#"{
        "version": 2,
        "options": {"day1-hour1": [{"title": "Math"}, {"code": "5"}, {"title": "", "code": "1"}]},
        "chosen": {"day1-hour2": {"code": "3"}, "day2-hour1": {"title": ""}}
    }"#;

    pub const CORRUPTED: &str = "{\"options\": [not json";
}
