use maud::{Markup, html};
use timegrid_core::{Grid, GroupGrid};

use crate::generation::GenerationStatus;
use crate::views::grid::grid_table;

pub const NO_STUDENT_CLASSES: &str = "No classes found for this student.";
pub const NO_MASTER_CLASSES: &str = "No master timetable available.";

/// One-shot message shown after a generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(&'static str),
}

/// What a data panel has to show for the current request.
#[derive(Debug)]
pub enum PanelState<T> {
    /// Nothing requested yet.
    Idle,
    Loaded(T),
    Failed(&'static str),
}

pub fn generate_panel(last: Option<&GenerationStatus>, notice: Option<&Notice>) -> Markup {
    html! {
        section.panel #generate {
            h2 { "Generate timetable" }
            form method="post" action="/generate" {
                button type="submit" { "Generate" }
            }
            @if let Some(notice) = notice {
                @match notice {
                    Notice::Success(message) => {
                        p.notice.success role="status" { (message) }
                    }
                    Notice::Failure(message) => {
                        p.notice.failure role="alert" { (message) }
                    }
                }
            }
            @if let Some(status) = last {
                p.hint {
                    "Last generated " (status.completed_at.format("%Y-%m-%d %H:%M:%S UTC"))
                }
            }
        }
    }
}

pub fn student_panel(student_id: Option<&str>, state: &PanelState<Grid>) -> Markup {
    html! {
        section.panel #student {
            h2 { "Student timetable" }
            form method="get" action="/student" {
                label for="student_id" { "Student ID " }
                input type="text" id="student_id" name="student_id" value=(student_id.unwrap_or_default()) required;
                " "
                button type="submit" { "Look up" }
            }
            @match state {
                PanelState::Idle => {}
                PanelState::Loaded(grid) => {
                    @if let Some(student_id) = student_id {
                        h3 { "Timetable for " (student_id) }
                    }
                    (grid_table(grid, NO_STUDENT_CLASSES))
                }
                PanelState::Failed(message) => {
                    p.notice.failure role="alert" { (message) }
                }
            }
        }
    }
}

pub fn master_panel(state: &PanelState<Vec<GroupGrid>>) -> Markup {
    html! {
        section.panel #master {
            h2 { "Master timetable" }
            @match state {
                PanelState::Idle => {}
                PanelState::Loaded(groups) => {
                    @if groups.is_empty() {
                        p.empty-state { (NO_MASTER_CLASSES) }
                    }
                    @for group in groups {
                        div.group {
                            h3 { "Group " (group.group) }
                            (grid_table(&group.grid, NO_MASTER_CLASSES))
                        }
                    }
                }
                PanelState::Failed(message) => {
                    p.notice.failure role="alert" { (message) }
                }
            }
        }
    }
}
