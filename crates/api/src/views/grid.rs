use maud::{Markup, html};
use timegrid_core::{Grid, LessonRecord};

/// Placeholder for a cell without a lesson.
pub const EMPTY_CELL: &str = "—";

/// Renders one grid as a table: weekdays down, slots across.
///
/// An empty grid renders `empty_message` instead of a table.
pub fn grid_table(grid: &Grid, empty_message: &str) -> Markup {
    html! {
        @if grid.is_empty() {
            p.empty-state { (empty_message) }
        } @else {
            @if !grid.collisions().is_empty() {
                (collision_notice(grid))
            }
            div.table-wrap {
                table.timetable {
                    thead {
                        tr {
                            th { "Day" }
                            @for slot in grid.slots() {
                                th.slot { (slot) }
                            }
                        }
                    }
                    tbody {
                        @for row in grid.rows() {
                            tr {
                                th.day { (row.day) }
                                @for cell in &row.cells {
                                    (lesson_cell(cell.as_ref()))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn lesson_cell(lesson: Option<&LessonRecord>) -> Markup {
    html! {
        @match lesson {
            Some(lesson) => {
                td.lesson {
                    div.course { (lesson.course_id) }
                    div.faculty { (lesson.faculty_id) }
                    div.room { (lesson.room_id) }
                }
            }
            None => {
                td.vacant { (EMPTY_CELL) }
            }
        }
    }
}

fn collision_notice(grid: &Grid) -> Markup {
    html! {
        div.collision-notice {
            p {
                (grid.collisions().len())
                @if grid.collisions().len() == 1 { " overlapping lesson is hidden:" } @else { " overlapping lessons are hidden:" }
            }
            ul {
                @for collision in grid.collisions() {
                    li {
                        (collision.displaced.course_id) " on " (collision.day) " " (collision.slot)
                        " (shown: " (collision.replacement.course_id) ")"
                    }
                }
            }
        }
    }
}
