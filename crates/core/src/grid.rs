//! Weekday × slot grid construction.
//!
//! A [`Grid`] is derived from one scope of lessons (a student, or one group of
//! the master timetable) and rebuilt from scratch on every fetch.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{lesson::LessonRecord, weekday::Weekday};
use crate::slot::{compare_slots, normalize_slot};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridRow {
    pub day: Weekday,
    /// One entry per column of [`Grid::slots`].
    pub cells: Vec<Option<LessonRecord>>,
}

/// A lesson pushed out of its cell by a later lesson for the same day and slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    pub day: Weekday,
    pub slot: String,
    pub displaced: LessonRecord,
    pub replacement: LessonRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    slots: Vec<String>,
    rows: Vec<GridRow>,
    collisions: Vec<Collision>,
}

impl Grid {
    /// Builds the grid for one scope of lessons.
    ///
    /// Columns are the distinct normalized slot labels ordered by start time
    /// (ties keep first-appearance order). Rows are all seven weekdays. When two
    /// lessons land in the same cell the later one in input order is kept and
    /// the earlier one is recorded in [`Grid::collisions`].
    pub fn build(records: &[LessonRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut slots: Vec<String> = records
            .iter()
            .map(LessonRecord::slot)
            .filter(|slot| seen.insert(*slot))
            .map(str::to_string)
            .collect();
        slots.sort_by(|a, b| compare_slots(a, b));

        let columns: HashMap<&str, usize> = slots
            .iter()
            .enumerate()
            .map(|(column, slot)| (slot.as_str(), column))
            .collect();

        let mut rows: Vec<GridRow> = Weekday::ALL
            .into_iter()
            .map(|day| GridRow {
                day,
                cells: vec![None; slots.len()],
            })
            .collect();
        let mut collisions = Vec::new();

        for record in records {
            let Some(&column) = columns.get(record.slot()) else {
                continue;
            };

            let cell = &mut rows[record.day.index()].cells[column];
            if let Some(displaced) = cell.replace(record.clone()) {
                warn!(
                    day = %record.day,
                    slot = record.slot(),
                    displaced = %displaced.course_id,
                    replacement = %record.course_id,
                    "Two lessons share a grid cell, keeping the later one"
                );
                collisions.push(Collision {
                    day: record.day,
                    slot: record.slot().to_string(),
                    displaced,
                    replacement: record.clone(),
                });
            }
        }

        Self {
            slots,
            rows,
            collisions,
        }
    }

    /// Column labels, earliest first.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Always seven rows, Monday first.
    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Looks up a cell. The slot may be given with or without a weekday prefix.
    pub fn cell(&self, day: Weekday, slot: &str) -> Option<&LessonRecord> {
        let slot = normalize_slot(slot);
        let column = self.slots.iter().position(|label| label == slot)?;
        self.rows
            .get(day.index())
            .and_then(|row| row.cells.get(column))
            .and_then(Option::as_ref)
    }

    /// Number of occupied cells.
    pub fn lesson_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.lesson_count() == 0
    }
}
