//! # timegrid client
//!
//! Access to the timetable generation backend. Handlers only ever see the
//! [`TimetableSource`] trait; [`HttpTimetableSource`] is the production
//! implementation and [`MockTimetableSource`] stands in for it in tests.

pub mod http;
pub mod responses;

use async_trait::async_trait;
use mockall::automock;
use timegrid_core::{LessonRecord, TimetableResult};

pub use http::{HttpSourceConfig, HttpTimetableSource};

/// The three backend operations the dashboard depends on.
#[automock]
#[async_trait]
pub trait TimetableSource: Send + Sync {
    /// Asks the backend to (re)generate the timetable. Returns its message.
    async fn generate(&self) -> TimetableResult<String>;

    /// Lessons for one student, in backend order.
    async fn student_timetable(&self, student_id: &str) -> TimetableResult<Vec<LessonRecord>>;

    /// Every lesson of every group, in backend order.
    async fn master_timetable(&self) -> TimetableResult<Vec<LessonRecord>>;
}
