// Ports - Interface definitions (contracts)

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for running the external transcoder
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `args[0]` with the remaining arguments and wait for it to exit.
    ///
    /// Fails only when the process cannot be started; a non-zero exit is
    /// reported through the returned [`ProcessExit`].
    async fn run(&self, args: &[OsString]) -> Result<ProcessExit, DomainError>;
}

/// Port for file system queries
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check whether the path names an existing directory
    async fn directory_exists(&self, path: &Path) -> Result<bool, DomainError>;
}

/// Port for logging and progress reporting
#[async_trait]
pub trait LogPort: Send + Sync {
    /// Log info message
    async fn info(&self, message: &str);

    /// Log warning message
    async fn warn(&self, message: &str);

    /// Log error message
    async fn error(&self, message: &str);

    /// Log debug message
    async fn debug(&self, message: &str);
}

/// Log level enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Map the `-v` count: none shows warnings, one adds info, more adds debug
    pub fn from_verbosity(verbose: u8) -> Self {
        match verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
