//! Server-rendered HTML, built with maud.

pub mod grid;
pub mod layout;
pub mod panels;
