//! Response bodies of the generation backend.

use serde::{Deserialize, Serialize};
use timegrid_core::LessonRecord;

/// `GET /generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub message: String,
}

/// `GET /timetable/{student_id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentTimetableResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub timetable: Vec<LessonRecord>,
}

/// `GET /master`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterTimetableResponse {
    pub master_timetable: Vec<LessonRecord>,
}

/// Failure body. The backend also sends this with a 200 status for unknown students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
