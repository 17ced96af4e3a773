use axum::{Router, routing::post};
use std::sync::Arc;

use crate::{ApiState, handlers};

/// Generation endpoints. These wait for the backend however long it takes,
/// so they are mounted outside the lookup timeout.
pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/generate", post(handlers::generate::generate_page))
        .route("/api/generate", post(handlers::generate::generate_json))
}
