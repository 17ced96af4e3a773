use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed backend response: {0}")]
    Decode(String),

    #[error("Timetable generation already in progress")]
    InProgress,

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

impl TimetableError {
    /// True for every variant the dashboard reports to users as "request failed".
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            TimetableError::Upstream { .. } | TimetableError::Network(_) | TimetableError::Decode(_)
        )
    }
}

impl From<serde_json::Error> for TimetableError {
    fn from(err: serde_json::Error) -> Self {
        TimetableError::Decode(err.to_string())
    }
}

pub type TimetableResult<T> = Result<T, TimetableError>;
