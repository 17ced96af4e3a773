//! Page shell: header, generate panel, tab bar and the active panel.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::generation::GenerationStatus;
use crate::views::panels::{Notice, generate_panel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Student,
    Master,
}

impl Tab {
    fn href(&self) -> &'static str {
        match self {
            Tab::Student => "/student",
            Tab::Master => "/master",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Tab::Student => "Student timetable",
            Tab::Master => "Master timetable",
        }
    }
}

/// Which part of the dashboard is offered.
///
/// The tabs only appear once a generation has completed in this process.
/// The tab routes stay reachable directly, since the backend may already hold
/// a timetable from an earlier run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Generate,
    Browse,
}

impl Stage {
    pub fn from_status(status: Option<&GenerationStatus>) -> Self {
        match status {
            Some(_) => Stage::Browse,
            None => Stage::Generate,
        }
    }
}

pub fn page(
    last: Option<&GenerationStatus>,
    notice: Option<&Notice>,
    active: Option<Tab>,
    panel: Markup,
) -> Markup {
    let stage = Stage::from_status(last);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Timetable Dashboard" }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.container {
                    header {
                        h1 { a href="/" { "Timetable Dashboard" } }
                    }
                    (generate_panel(last, notice))
                    @match stage {
                        Stage::Browse => {
                            nav.tabs {
                                @for tab in [Tab::Student, Tab::Master] {
                                    a.tab.active[active == Some(tab)] href=(tab.href()) { (tab.label()) }
                                }
                            }
                        }
                        Stage::Generate => {
                            p.hint { "Generate a timetable to browse student and master views." }
                        }
                    }
                    main { (panel) }
                }
            }
        }
    }
}

const CSS: &str = r#"
* { box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    margin: 0;
    background: #f4f6f9;
    color: #1d2733;
}

.container { max-width: 1200px; margin: 0 auto; padding: 24px; }

header h1 { margin: 0 0 16px; font-size: 1.6rem; }
header h1 a { color: inherit; text-decoration: none; }

.panel {
    background: #fff;
    border-radius: 8px;
    padding: 16px 20px;
    margin-bottom: 16px;
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
}

.notice { padding: 8px 12px; border-radius: 6px; margin: 8px 0; }
.notice.success { background: #e6f6ea; color: #1e6b34; }
.notice.failure { background: #fdeaea; color: #8a1f1f; }

.hint { color: #5b6878; }

.tabs { display: flex; gap: 8px; margin-bottom: 16px; }
.tab {
    padding: 8px 14px;
    border-radius: 6px;
    background: #e3e8ef;
    color: #1d2733;
    text-decoration: none;
}
.tab.active { background: #2f6fde; color: #fff; }

button, input[type=text] { font-size: 1rem; padding: 6px 10px; }

.table-wrap { overflow-x: auto; }
table.timetable { border-collapse: collapse; width: 100%; }
table.timetable th, table.timetable td {
    border: 1px solid #d5dbe3;
    padding: 6px 8px;
    text-align: center;
    vertical-align: top;
}
table.timetable th.day { text-align: left; background: #f0f3f7; }
td.lesson .course { font-weight: 600; }
td.lesson .faculty, td.lesson .room { font-size: 0.85rem; color: #5b6878; }
td.vacant { color: #b3bcc8; }

.empty-state { color: #5b6878; font-style: italic; }
.collision-notice { background: #fff6e0; padding: 8px 12px; border-radius: 6px; margin-bottom: 8px; }
.group h3 { margin: 16px 0 8px; }
"#;
