use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timetable/:student_id",
            get(handlers::student::student_grid_json),
        )
        .route("/api/master", get(handlers::master::master_grids_json))
}
