use axum::{Json, extract::State};
use maud::Markup;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use timegrid_core::{GroupGrid, TimetableResult, build_master_grids};
use tracing::info;

use crate::{
    ApiState,
    handlers::log_failure,
    middleware::error_handling::AppError,
    views::{
        layout::{self, Tab},
        panels::{PanelState, master_panel},
    },
};

pub const MASTER_FAILED: &str = "Failed to fetch master timetable.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterGridResponse {
    pub groups: Vec<GroupGrid>,
}

/// Fetches the master timetable and grids it per group.
pub async fn load_master_grids(state: &ApiState) -> TimetableResult<Vec<GroupGrid>> {
    let records = state.source.master_timetable().await?;
    let groups = build_master_grids(records);
    info!(groups = groups.len(), "Fetched master timetable");
    Ok(groups)
}

/// GET /master
#[axum::debug_handler]
pub async fn master_page(State(state): State<Arc<ApiState>>) -> Markup {
    let panel = match load_master_grids(&state).await {
        Ok(groups) => PanelState::Loaded(groups),
        Err(e) => {
            log_failure("master_timetable", &e);
            PanelState::Failed(MASTER_FAILED)
        }
    };

    let last = state.generation.last().await;
    layout::page(last.as_ref(), None, Some(Tab::Master), master_panel(&panel))
}

/// GET /api/master
#[axum::debug_handler]
pub async fn master_grids_json(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<MasterGridResponse>, AppError> {
    let groups = load_master_grids(&state).await?;
    Ok(Json(MasterGridResponse { groups }))
}
