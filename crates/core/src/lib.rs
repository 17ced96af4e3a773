//! # timegrid core
//!
//! Data model and the pure transformations behind every timetable view:
//! slot normalization, time ordering, grid construction and master
//! partitioning. Nothing here performs I/O.

pub mod errors;
pub mod grid;
pub mod master;
pub mod models;
pub mod slot;

pub use errors::{TimetableError, TimetableResult};
pub use grid::{Collision, Grid, GridRow};
pub use master::{GroupGrid, build_master_grids, partition_by_group};
pub use models::{lesson::LessonRecord, weekday::Weekday};
