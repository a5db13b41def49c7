use super::{ChosenItem, SlotKey};

/// A single user-triggered change to the schedule.
///
/// Commands name the slot and option position they affect instead of
/// holding references into the rendered grid, so they stay valid across
/// re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleCommand {
    AddOption {
        key: SlotKey,
        title: String,
        code: String,
    },
    Promote {
        key: SlotKey,
        index: usize,
    },
    RemoveOption {
        key: SlotKey,
        index: usize,
    },
    SetChosen {
        key: SlotKey,
        item: ChosenItem,
    },
    ClearChosen {
        key: SlotKey,
    },
}

impl ScheduleCommand {
    pub fn key(&self) -> &SlotKey {
        match self {
            ScheduleCommand::AddOption { key, .. }
            | ScheduleCommand::Promote { key, .. }
            | ScheduleCommand::RemoveOption { key, .. }
            | ScheduleCommand::SetChosen { key, .. }
            | ScheduleCommand::ClearChosen { key } => key,
        }
    }

    /// Short label used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            ScheduleCommand::AddOption { .. } => "add-option",
            ScheduleCommand::Promote { .. } => "promote",
            ScheduleCommand::RemoveOption { .. } => "remove-option",
            ScheduleCommand::SetChosen { .. } => "set-chosen",
            ScheduleCommand::ClearChosen { .. } => "clear-chosen",
        }
    }
}
