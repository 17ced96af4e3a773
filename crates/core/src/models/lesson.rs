use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::weekday::Weekday;
use crate::slot::{normalize_slot, slot_weekday};

/// One scheduled class occurrence as reported by the timetable backend.
///
/// Records are decoded once per fetch and never modified afterwards. The
/// backend exports them from a dataframe, so the wire keys are the column
/// titles (`"Course ID"`, `"Batch/Group ID"`, ...); camelCase and snake_case
/// spellings are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLessonRecord")]
pub struct LessonRecord {
    pub day: Weekday,
    pub time_slot: String,
    pub course_id: String,
    pub faculty_id: String,
    pub room_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl LessonRecord {
    pub fn new(
        day: Weekday,
        time_slot: impl Into<String>,
        course_id: impl Into<String>,
        faculty_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Self {
        Self {
            day,
            time_slot: time_slot.into(),
            course_id: course_id.into(),
            faculty_id: faculty_id.into(),
            room_id: room_id.into(),
            group_id: None,
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// The slot label without any weekday prefix.
    pub fn slot(&self) -> &str {
        normalize_slot(&self.time_slot)
    }
}

/// Identifier columns arrive as strings or, for numeric ids, as JSON numbers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Identifier {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Text(text) => f.write_str(text),
            Identifier::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawLessonRecord {
    #[serde(default, alias = "Day")]
    day: Option<String>,
    #[serde(default, rename = "Time Slot", alias = "timeSlot", alias = "time_slot")]
    time_slot: Option<String>,
    #[serde(default, alias = "Time")]
    time: Option<String>,
    #[serde(default, rename = "Course ID", alias = "courseId", alias = "course_id")]
    course_id: Option<Identifier>,
    #[serde(default, rename = "Faculty ID", alias = "facultyId", alias = "faculty_id")]
    faculty_id: Option<Identifier>,
    #[serde(default, rename = "Room ID", alias = "roomId", alias = "room_id")]
    room_id: Option<Identifier>,
    #[serde(default, rename = "Batch/Group ID", alias = "groupId", alias = "group_id")]
    group_id: Option<Identifier>,
}

fn display_or_empty(id: Option<Identifier>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

impl TryFrom<RawLessonRecord> for LessonRecord {
    type Error = String;

    fn try_from(raw: RawLessonRecord) -> Result<Self, Self::Error> {
        let time_slot = raw
            .time_slot
            .or(raw.time)
            .ok_or_else(|| "lesson record has no time slot".to_string())?;

        // An explicit day wins; otherwise fall back to the slot's weekday prefix.
        let day = raw
            .day
            .as_deref()
            .and_then(|day| day.parse::<Weekday>().ok())
            .or_else(|| slot_weekday(&time_slot))
            .ok_or_else(|| match &raw.day {
                Some(day) => format!("unknown weekday {:?} for slot {:?}", day, time_slot),
                None => format!("no weekday for slot {:?}", time_slot),
            })?;

        let group_id = raw
            .group_id
            .map(|id| id.to_string())
            .filter(|id| !id.trim().is_empty());

        Ok(LessonRecord {
            day,
            time_slot,
            course_id: display_or_empty(raw.course_id),
            faculty_id: display_or_empty(raw.faculty_id),
            room_id: display_or_empty(raw.room_id),
            group_id,
        })
    }
}
