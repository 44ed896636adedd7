//! FFmpeg execution adapter
//!
//! Spawns the transcoder as a child process and waits for it to exit. The
//! child inherits the standard streams; nothing is read from them.

use std::ffi::OsString;
use std::io;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;

/// Process runner backed by `tokio::process`
#[derive(Debug, Default)]
pub struct FFmpegAdapter;

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProcessRunner for FFmpegAdapter {
    async fn run(&self, args: &[OsString]) -> Result<ProcessExit, DomainError> {
        let (program, rest) = args.split_first().ok_or_else(|| DomainError::TranscoderSpawn {
            program: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty command line"),
        })?;

        debug!("Spawning {:?} with {} arguments", program, rest.len());

        let status = Command::new(program)
            .args(rest)
            .status()
            .await
            .map_err(|e| DomainError::TranscoderSpawn {
                program: program.to_string_lossy().into_owned(),
                source: e,
            })?;

        Ok(ProcessExit::from(status))
    }
}
