//! # Error Handling Middleware
//!
//! Maps timetable errors to HTTP status codes and JSON bodies for the JSON
//! API. HTML pages never use this path: they render failures inline so that
//! one failing panel leaves the rest of the page intact.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use timegrid_core::errors::TimetableError;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use timegrid_api::middleware::error_handling::AppError;
/// use timegrid_core::errors::TimetableError;
///
/// async fn handler(student_id: String) -> Result<Json<String>, AppError> {
///     if student_id.trim().is_empty() {
///         return Err(AppError(TimetableError::Validation("Student ID is required".into())));
///     }
///     Ok(Json(student_id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub TimetableError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TimetableError::Validation(_) => StatusCode::BAD_REQUEST,
            TimetableError::InProgress => StatusCode::CONFLICT,
            TimetableError::Upstream { .. }
            | TimetableError::Network(_)
            | TimetableError::Decode(_) => StatusCode::BAD_GATEWAY,
            TimetableError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.0.to_string() }));

        (status, body).into_response()
    }
}

impl From<TimetableError> for AppError {
    fn from(err: TimetableError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TimetableError::Internal(err))
    }
}
