//! # timegrid API
//!
//! The web server of the timegrid dashboard. It renders the timetable pages
//! and exposes the same grids as JSON.
//!
//! ## Architecture
//!
//! - **Routes**: URL structure, split into pages, JSON API and health
//! - **Handlers**: Fetch from the timetable source and shape the result
//! - **Views**: maud templates for the page shell, panels and grids
//! - **Middleware**: Error to response mapping for the JSON API
//! - **Config**: Environment configuration
//!
//! The backend is reached only through [`TimetableSource`], so the server can
//! run against the HTTP client or a mock.

/// Configuration module for dashboard settings
pub mod config;
/// Single-flight generation tracking
pub mod generation;
/// Request handlers
pub mod handlers;
/// Error handling shared by the JSON handlers
pub mod middleware;
/// Route definitions
pub mod routes;
/// HTML rendering
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use eyre::{Result, WrapErr};
use timegrid_client::TimetableSource;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crate::generation::GenerationTracker;

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState::new(Arc::new(source)));
/// let app = timegrid_api::app(state, None);
/// ```
pub struct ApiState {
    /// Where timetables come from
    pub source: Arc<dyn TimetableSource>,
    /// Generation guard and last completed generation
    pub generation: GenerationTracker,
}

impl ApiState {
    pub fn new(source: Arc<dyn TimetableSource>) -> Self {
        Self {
            source,
            generation: GenerationTracker::new(),
        }
    }
}

/// Builds the router with every route and the shared state attached.
///
/// `lookup_timeout` bounds every route except generation, which has to wait
/// for the backend to finish.
pub fn app(state: Arc<ApiState>, lookup_timeout: Option<Duration>) -> Router {
    let lookups = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Page shell and panels
        .merge(routes::pages::routes())
        // JSON grids
        .merge(routes::api::routes());

    let lookups = match lookup_timeout {
        Some(timeout) => lookups.layer(TimeoutLayer::new(timeout)),
        None => lookups,
    };

    Router::new()
        .merge(routes::generate::routes())
        .merge(lookups)
        .with_state(state)
}

/// Starts the dashboard server
///
/// Initializes logging, wraps the router in CORS and tracing layers
/// and serves until the process stops.
///
/// # Arguments
///
/// * `config` - Dashboard configuration
/// * `source` - Timetable source the handlers read from
pub async fn start_server(
    config: config::DashConfig,
    source: Arc<dyn TimetableSource>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(source));
    let app = app(state, config.request_timeout);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins = origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .wrap_err_with(|| format!("Invalid CORS origin: {}", origin))
            })
            .collect::<Result<Vec<_>>>()?;

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(AllowOrigin::list(origins));

        app.layer(cors)
    } else {
        app
    };

    let app = app.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        backend = %config.backend_url,
        "Dashboard listening on http://{}", addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
