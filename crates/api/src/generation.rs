//! Single-flight tracking of timetable generation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use timegrid_client::TimetableSource;
use timegrid_core::{TimetableError, TimetableResult};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

/// Outcome of the most recent successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStatus {
    pub message: String,
    pub completed_at: DateTime<Utc>,
}

/// Allows one generation request in flight and remembers the last success.
///
/// The backend call runs on its own task which owns the in-flight guard, so a
/// dropped request (client gone, caller cancelled) keeps the slot taken until
/// the backend answers. A failed generation leaves the previous status
/// untouched.
#[derive(Debug, Default)]
pub struct GenerationTracker {
    in_flight: Arc<Mutex<()>>,
    last: Arc<RwLock<Option<GenerationStatus>>>,
}

impl GenerationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a generation against `source`, or fails with
    /// [`TimetableError::InProgress`] if one is already running.
    pub async fn run(
        &self,
        source: Arc<dyn TimetableSource>,
    ) -> TimetableResult<GenerationStatus> {
        let Ok(guard) = self.in_flight.clone().try_lock_owned() else {
            warn!("Rejected generation request, another one is in flight");
            return Err(TimetableError::InProgress);
        };

        let last = self.last.clone();
        let task = tokio::spawn(async move {
            let _guard = guard;

            let message = source.generate().await?;
            let status = GenerationStatus {
                message,
                completed_at: Utc::now(),
            };
            info!(message = %status.message, "Timetable generation completed");

            *last.write().await = Some(status.clone());
            Ok::<_, TimetableError>(status)
        });

        task.await
            .map_err(|e| TimetableError::Internal(eyre::Report::new(e)))?
    }

    pub async fn last(&self) -> Option<GenerationStatus> {
        self.last.read().await.clone()
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }
}
