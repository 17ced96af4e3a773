use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/", get(handlers::shell::index))
        .route("/student", get(handlers::student::student_page))
        .route("/master", get(handlers::master::master_page))
}
