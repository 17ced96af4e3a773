use axum::{Json, extract::State};
use maud::{Markup, html};
use std::sync::Arc;
use timegrid_core::errors::TimetableError;

use crate::{
    ApiState,
    generation::GenerationStatus,
    handlers::log_failure,
    middleware::error_handling::AppError,
    views::{layout, panels::Notice},
};

pub const GENERATION_FAILED: &str = "Failed to generate timetable.";
pub const GENERATION_BUSY: &str = "A timetable is already being generated.";

/// POST /generate
///
/// Runs a generation and re-renders the shell with a one-shot notice. A
/// failure keeps whatever status the previous generation left.
#[axum::debug_handler]
pub async fn generate_page(State(state): State<Arc<ApiState>>) -> Markup {
    let notice = match state.generation.run(state.source.clone()).await {
        Ok(status) => Notice::Success(status.message),
        Err(TimetableError::InProgress) => Notice::Failure(GENERATION_BUSY),
        Err(e) => {
            log_failure("generate", &e);
            Notice::Failure(GENERATION_FAILED)
        }
    };

    let last = state.generation.last().await;
    layout::page(last.as_ref(), Some(&notice), None, html! {})
}

/// POST /api/generate
#[axum::debug_handler]
pub async fn generate_json(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<GenerationStatus>, AppError> {
    let status = state.generation.run(state.source.clone()).await?;
    Ok(Json(status))
}
