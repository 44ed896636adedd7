// Tracing log adapter - Structured logging using tracing crate

use async_trait::async_trait;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config_initialization::LogFormat;
use crate::ports::*;

/// Tracing log adapter
#[derive(Debug, Clone)]
pub struct TracingLogAdapter {
    level: LogLevel,
}

impl TracingLogAdapter {
    /// Install the global subscriber and create the adapter.
    ///
    /// `RUST_LOG` takes precedence over the verbosity-derived level when set.
    /// Output goes to stderr so it never mixes with clip paths on stdout.
    pub fn init(level: LogLevel, format: LogFormat) -> Self {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        // A subscriber may already be installed (tests, embedding); keep it
        let _ = match format {
            LogFormat::Pretty => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        Self { level }
    }

    /// Level the adapter was configured with
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

#[async_trait]
impl LogPort for TracingLogAdapter {
    async fn info(&self, message: &str) {
        info!("{}", message);
    }

    async fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    async fn error(&self, message: &str) {
        error!("{}", message);
    }

    async fn debug(&self, message: &str) {
        debug!("{}", message);
    }
}
