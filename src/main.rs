use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use timegrid_api::config::DashConfig;
use timegrid_client::{HttpSourceConfig, HttpTimetableSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = DashConfig::from_env()?;

    // Connect the dashboard to the generation backend
    let source = HttpTimetableSource::with_config(HttpSourceConfig {
        timeout: config.backend_timeout,
        ..HttpSourceConfig::new(config.backend_url.clone())
    })?;

    // Start the dashboard server
    timegrid_api::start_server(config, Arc::new(source)).await?;

    Ok(())
}
