// TOML config adapter - Optional settings file using TOML

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config_initialization::LogFormat;
use crate::domain::errors::*;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "multiclip.toml";

/// Settings that may appear under `[multiclip]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub transcoder: Option<String>,
    pub check_timestamps: Option<bool>,
    pub log_format: Option<LogFormat>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    multiclip: FileSettings,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load settings from an explicit path, or from the default file if present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just yields empty settings.
    pub fn load(explicit: Option<&Path>) -> Result<(FileSettings, Option<PathBuf>), DomainError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok((FileSettings::default(), None));
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|e| DomainError::Fs {
            path: path.clone(),
            source: e,
        })?;
        let settings = Self::parse(&content).map_err(|message| DomainError::Config {
            path: path.clone(),
            message,
        })?;

        Ok((settings, Some(path)))
    }

    /// Parse the TOML text of a settings file
    pub fn parse(content: &str) -> Result<FileSettings, String> {
        toml::from_str::<ConfigFile>(content)
            .map(|file| file.multiclip)
            .map_err(|e| e.to_string())
    }
}
