//! reqwest-backed [`TimetableSource`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use timegrid_core::{LessonRecord, TimetableError, TimetableResult};
use tracing::{debug, error, info};
use url::Url;
use uuid::Uuid;

use crate::TimetableSource;
use crate::responses::{
    ErrorResponse, GenerateResponse, MasterTimetableResponse, StudentTimetableResponse,
};

/// Longest slice of a non-JSON error body kept in the error message.
const MAX_ERROR_BODY: usize = 200;

/// Configuration for [`HttpTimetableSource`].
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Base URL of the generation backend, e.g. `http://localhost:5000`
    pub base_url: Url,
    /// Whole-request timeout. `None` lets generation run as long as it needs.
    pub timeout: Option<Duration>,
    /// Connection establishment timeout
    pub connect_timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl HttpSourceConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("timegrid/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Talks to the generation backend over HTTP.
///
/// Every call is a single GET with no retry. Failures are classified into
/// [`TimetableError::Network`] (transport), [`TimetableError::Upstream`]
/// (backend said no) and [`TimetableError::Decode`] (unexpected body).
pub struct HttpTimetableSource {
    client: Client,
    config: HttpSourceConfig,
}

impl HttpTimetableSource {
    pub fn new(base_url: Url) -> TimetableResult<Self> {
        Self::with_config(HttpSourceConfig::new(base_url))
    }

    pub fn with_config(config: HttpSourceConfig) -> TimetableResult<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            TimetableError::Network(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self { client, config })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> TimetableResult<Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TimetableError::Internal(eyre::eyre!(
                    "backend URL {} cannot carry a path",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url, operation: &str) -> TimetableResult<T> {
        let correlation_id = Uuid::new_v4();
        let start = Instant::now();

        info!(
            correlation_id = %correlation_id,
            operation,
            url = %url,
            "Calling timetable backend"
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(
                correlation_id = %correlation_id,
                operation,
                error = %e,
                "Timetable backend unreachable"
            );
            TimetableError::Network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TimetableError::Network(e.to_string()))?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if let Ok(ErrorResponse { error: message }) = serde_json::from_slice(&body) {
            error!(
                correlation_id = %correlation_id,
                operation,
                status = status.as_u16(),
                elapsed_ms,
                error = %message,
                "Timetable backend reported an error"
            );
            return Err(TimetableError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        if !status.is_success() {
            let text: String = String::from_utf8_lossy(&body)
                .trim()
                .chars()
                .take(MAX_ERROR_BODY)
                .collect();
            let message = if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            } else {
                text
            };
            error!(
                correlation_id = %correlation_id,
                operation,
                status = status.as_u16(),
                elapsed_ms,
                "Timetable backend request failed"
            );
            return Err(TimetableError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = serde_json::from_slice(&body).map_err(|e| {
            error!(
                correlation_id = %correlation_id,
                operation,
                error = %e,
                "Timetable backend sent an unexpected body"
            );
            TimetableError::Decode(format!("{} response: {}", operation, e))
        })?;

        debug!(
            correlation_id = %correlation_id,
            operation,
            elapsed_ms,
            "Timetable backend call completed"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl TimetableSource for HttpTimetableSource {
    async fn generate(&self) -> TimetableResult<String> {
        let url = self.endpoint(&["generate"])?;
        let response: GenerateResponse = self.fetch(url, "generate").await?;
        Ok(response.message)
    }

    async fn student_timetable(&self, student_id: &str) -> TimetableResult<Vec<LessonRecord>> {
        let url = self.endpoint(&["timetable", student_id])?;
        let response: StudentTimetableResponse = self.fetch(url, "student_timetable").await?;
        Ok(response.timetable)
    }

    async fn master_timetable(&self) -> TimetableResult<Vec<LessonRecord>> {
        let url = self.endpoint(&["master"])?;
        let response: MasterTimetableResponse = self.fetch(url, "master_timetable").await?;
        Ok(response.master_timetable)
    }
}
