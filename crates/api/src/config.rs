//! # Dashboard Configuration Module
//!
//! This module loads the configuration of the timegrid dashboard server from
//! environment variables, providing defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `DASH_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `DASH_PORT`: The port to listen on (default: 3000)
//! - `TIMETABLE_BACKEND_URL`: Base URL of the generation backend (default: "http://localhost:5000")
//! - `BACKEND_TIMEOUT_SECONDS`: Timeout for backend calls (default: none)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `DASH_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `DASH_REQUEST_TIMEOUT_SECONDS`: Timeout for inbound lookups, generation excluded (default: none)

use eyre::{Result, WrapErr};
use std::env;
use std::time::Duration;
use tracing::Level;
use url::Url;

/// Configuration for the timegrid dashboard server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use timegrid_api::config::DashConfig;
///
/// fn example() -> Result<()> {
///     let config = DashConfig::from_env()?;
///     println!("Serving on {} for {}", config.server_addr(), config.backend_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Host address for the dashboard (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the dashboard to listen on
    pub port: u16,

    /// Base URL of the timetable generation backend
    pub backend_url: Url,

    /// Timeout for calls to the backend, unset means wait indefinitely
    pub backend_timeout: Option<Duration>,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins for the JSON API (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Timeout for inbound lookups, unset means no limit. Generation is never bounded.
    pub request_timeout: Option<Duration>,
}

impl DashConfig {
    /// Creates a new DashConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DASH_PORT value cannot be parsed as a u16
    /// - The TIMETABLE_BACKEND_URL value is not a valid URL
    /// - BACKEND_TIMEOUT_SECONDS or DASH_REQUEST_TIMEOUT_SECONDS is not a whole number of seconds
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = var("DASH_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("DASH_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid DASH_PORT value")?;

        // Backend settings
        let backend_url = var("TIMETABLE_BACKEND_URL")
            .unwrap_or_else(|| "http://localhost:5000".to_string());
        let backend_url = Url::parse(&backend_url)
            .wrap_err_with(|| format!("Invalid TIMETABLE_BACKEND_URL value: {}", backend_url))?;
        let backend_timeout = var("BACKEND_TIMEOUT_SECONDS")
            .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
            .transpose()
            .wrap_err("Invalid BACKEND_TIMEOUT_SECONDS value")?;

        // Logging settings
        let log_level = match var("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("DASH_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let request_timeout = var("DASH_REQUEST_TIMEOUT_SECONDS")
            .map(|secs| secs.parse::<u64>().map(Duration::from_secs))
            .transpose()
            .wrap_err("Invalid DASH_REQUEST_TIMEOUT_SECONDS value")?;

        Ok(Self {
            host,
            port,
            backend_url,
            backend_timeout,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
