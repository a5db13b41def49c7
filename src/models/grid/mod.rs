// Grid module
// Header/day/hour layout shared by the options and chosen grids

use crate::models::schedule::SlotKey;
use crate::models::vocabulary::Vocabulary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridKind {
    /// Candidate courses; every cell accepts new options.
    Options,
    /// Final timetable; one entry per cell, filled by promotion.
    Chosen,
}

impl GridKind {
    pub fn title(&self) -> &'static str {
        match self {
            GridKind::Options => "Options",
            GridKind::Chosen => "Chosen",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCell {
    /// Blank top-left cell.
    Corner,
    HourHeader(String),
    DayHeader(String),
    Slot { key: SlotKey, add_affordance: bool },
}

/// Row-major description of one grid: a header row followed by one row
/// per day. Holds no schedule data, so it can be rebuilt freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub kind: GridKind,
    pub rows: Vec<Vec<GridCell>>,
}

impl GridLayout {
    pub fn build(vocabulary: &Vocabulary, kind: GridKind) -> Self {
        let mut rows = Vec::with_capacity(vocabulary.days.len() + 1);

        let mut header = Vec::with_capacity(vocabulary.hours.len() + 1);
        header.push(GridCell::Corner);
        header.extend(vocabulary.hours.iter().cloned().map(GridCell::HourHeader));
        rows.push(header);

        for day in &vocabulary.days {
            let mut row = Vec::with_capacity(vocabulary.hours.len() + 1);
            row.push(GridCell::DayHeader(day.clone()));
            row.extend(vocabulary.hours.iter().map(|hour| GridCell::Slot {
                key: SlotKey::new(day.clone(), hour.clone()),
                add_affordance: kind == GridKind::Options,
            }));
            rows.push(row);
        }

        Self { kind, rows }
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Slot keys in row-major order.
    pub fn slots(&self) -> impl Iterator<Item = &SlotKey> {
        self.rows.iter().flatten().filter_map(|cell| match cell {
            GridCell::Slot { key, .. } => Some(key),
            _ => None,
        })
    }
}
