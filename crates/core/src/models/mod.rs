pub mod lesson;
pub mod weekday;
