//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Deserialize;

use crate::adapters::toml_config::{FileSettings, TomlConfigAdapter};
use crate::cli::Cli;
use crate::domain::errors::DomainError;

/// Transcoder executable looked up on `PATH` by default
pub const DEFAULT_TRANSCODER: &str = "ffmpeg";

/// Log line formatting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Effective settings for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub transcoder: String,
    pub check_timestamps: bool,
    pub log_format: LogFormat,
    /// Settings file that was read, if any
    pub config_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transcoder: DEFAULT_TRANSCODER.to_string(),
            check_timestamps: false,
            log_format: LogFormat::default(),
            config_file: None,
        }
    }
}

/// Resolve settings following precedence: CLI > Env > File > Defaults.
///
/// Environment variables are folded into the CLI values by clap.
pub fn initialize_configuration_hierarchy(cli: &Cli) -> Result<Settings, DomainError> {
    let (file, config_file) = TomlConfigAdapter::load(cli.config.as_deref())?;
    Ok(merge(cli, file, config_file))
}

fn merge(cli: &Cli, file: FileSettings, config_file: Option<PathBuf>) -> Settings {
    let defaults = Settings::default();

    Settings {
        transcoder: cli
            .transcoder
            .clone()
            .or(file.transcoder)
            .unwrap_or(defaults.transcoder),
        check_timestamps: cli.check_timestamps || file.check_timestamps.unwrap_or(false),
        log_format: cli
            .log_format
            .or(file.log_format)
            .unwrap_or(defaults.log_format),
        config_file,
    }
}
