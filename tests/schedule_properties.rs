// Property-based tests for the schedule model
// Random edit sequences must survive a save/load cycle unchanged

use class_schedule::models::schedule::{Schedule, ScheduleCommand, ScheduleSnapshot, SlotKey};
use class_schedule::models::vocabulary::Vocabulary;
use proptest::prelude::*;

fn vocabulary() -> Vocabulary {
    Vocabulary::new(["day1", "day2", "day3"], ["hour1", "hour2"])
}

fn slot_key() -> impl Strategy<Value = SlotKey> {
    (0..3usize, 0..2usize)
        .prop_map(|(d, h)| SlotKey::new(format!("day{}", d + 1), format!("hour{}", h + 1)))
}

fn command() -> impl Strategy<Value = ScheduleCommand> {
    prop_oneof![
        3 => (slot_key(), "[a-z]{1,6}", "[0-9]{0,3}")
            .prop_map(|(key, title, code)| ScheduleCommand::AddOption { key, title, code }),
        2 => (slot_key(), 0..4usize).prop_map(|(key, index)| ScheduleCommand::Promote { key, index }),
        1 => (slot_key(), 0..4usize)
            .prop_map(|(key, index)| ScheduleCommand::RemoveOption { key, index }),
        1 => slot_key().prop_map(|key| ScheduleCommand::ClearChosen { key }),
    ]
}

fn build(commands: &[ScheduleCommand]) -> Schedule {
    let mut schedule = Schedule::new(vocabulary());
    for command in commands {
        schedule.apply(command).unwrap();
    }
    schedule
}

proptest! {
    /// Property: whatever is saved reloads into an identical schedule
    #[test]
    fn prop_snapshot_round_trip(commands in prop::collection::vec(command(), 0..40)) {
        let schedule = build(&commands);

        let json = schedule.to_snapshot().to_json().unwrap();
        let snapshot = ScheduleSnapshot::from_json(&json).unwrap();
        let reloaded = Schedule::from_snapshot(vocabulary(), &snapshot);

        prop_assert_eq!(reloaded, schedule);
    }

    /// Property: saved documents never carry empty option lists
    #[test]
    fn prop_no_empty_option_lists(commands in prop::collection::vec(command(), 0..40)) {
        let snapshot = build(&commands).to_snapshot();
        prop_assert!(snapshot.options.values().all(|list| !list.is_empty()));
    }

    /// Property: at most one chosen entry per slot
    #[test]
    fn prop_chosen_bounded_by_slots(commands in prop::collection::vec(command(), 0..40)) {
        let schedule = build(&commands);
        prop_assert!(schedule.chosen_count() <= vocabulary().slot_count());
    }
}
