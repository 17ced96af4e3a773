//! # Student Lookup Handlers
//!
//! Fetch one student's lessons from the backend and lay them out as a grid.
//! The HTML page shows failures inline; the JSON endpoint maps them through
//! [`AppError`].

use axum::{
    Json,
    extract::{Path, Query, State},
};
use maud::Markup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timegrid_core::{Grid, TimetableError, TimetableResult};
use tracing::info;

use crate::{
    ApiState,
    handlers::log_failure,
    middleware::error_handling::AppError,
    views::{
        layout::{self, Tab},
        panels::{PanelState, student_panel},
    },
};

pub const STUDENT_FAILED: &str = "Failed to fetch timetable.";

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub student_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentGridResponse {
    pub student_id: String,
    pub grid: Grid,
}

/// Fetches and grids one student's timetable.
pub async fn load_student_grid(state: &ApiState, student_id: &str) -> TimetableResult<Grid> {
    let student_id = student_id.trim();
    if student_id.is_empty() {
        return Err(TimetableError::Validation(
            "Student ID is required".to_string(),
        ));
    }

    let records = state.source.student_timetable(student_id).await?;
    info!(student_id, lessons = records.len(), "Fetched student timetable");
    Ok(Grid::build(&records))
}

/// GET /student?student_id=...
#[axum::debug_handler]
pub async fn student_page(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<StudentQuery>,
) -> Markup {
    let student_id = query
        .student_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let panel = match student_id {
        None => PanelState::Idle,
        Some(id) => match load_student_grid(&state, id).await {
            Ok(grid) => PanelState::Loaded(grid),
            Err(e) => {
                log_failure("student_timetable", &e);
                PanelState::Failed(STUDENT_FAILED)
            }
        },
    };

    let last = state.generation.last().await;
    layout::page(
        last.as_ref(),
        None,
        Some(Tab::Student),
        student_panel(student_id, &panel),
    )
}

/// GET /api/timetable/:student_id
#[axum::debug_handler]
pub async fn student_grid_json(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<String>,
) -> Result<Json<StudentGridResponse>, AppError> {
    let grid = load_student_grid(&state, &student_id).await?;

    Ok(Json(StudentGridResponse {
        student_id: student_id.trim().to_string(),
        grid,
    }))
}
