//! Command implementations

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::adapters::TracingLogAdapter;
use crate::app::{AppContainer, DefaultAppContainer};
use crate::cli::Cli;
use crate::config_initialization::initialize_configuration_hierarchy;
use crate::domain::model::ClipReport;

/// Execute the clip command: resolve settings, start logging, extract clips
pub async fn clip(cli: Cli) -> Result<ClipReport> {
    let settings =
        initialize_configuration_hierarchy(&cli).context("Failed to load configuration")?;

    let log_adapter = TracingLogAdapter::init(cli.log_level(), settings.log_format);
    debug!("Log level: {:?}", log_adapter.level());
    if let Some(path) = &settings.config_file {
        info!("Loaded configuration from {}", path.display());
    }
    debug!("Resolved settings: {:?}", settings);

    let container = DefaultAppContainer::new(&settings, log_adapter);
    let job = cli.into_job(settings.check_timestamps);

    let report = container.clip_interactor().execute(job).await?;

    info!("Extracted {} clip(s)", report.clip_count());
    Ok(report)
}
