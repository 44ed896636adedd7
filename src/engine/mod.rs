//! Clip execution engine
//!
//! Turns a [`ClipRequest`] into a transcoder command line and runs it to
//! completion through the [`ProcessRunner`] port.

use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::model::ClipRequest;
use crate::ports::{LogPort, ProcessRunner};

pub mod invocation;

pub use invocation::TranscoderCommand;

/// Runs one transcoder process per clip
pub struct ClipExecutor {
    program: String,
    runner: Arc<dyn ProcessRunner>,
    log_port: Arc<dyn LogPort>,
}

impl ClipExecutor {
    pub fn new(
        program: impl Into<String>,
        runner: Arc<dyn ProcessRunner>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            program: program.into(),
            runner,
            log_port,
        }
    }

    /// Extract clip `clip` of `total` and wait for the transcoder to exit.
    ///
    /// Any exit other than success is returned as
    /// [`DomainError::TranscoderFailed`]; partial output is left in place.
    pub async fn run(
        &self,
        request: &ClipRequest,
        clip: usize,
        total: usize,
    ) -> Result<(), DomainError> {
        let command = TranscoderCommand::build(&self.program, request);
        self.log_port
            .debug(&format!("Transcoder command: {:?}", command.args()))
            .await;

        let exit = self.runner.run(command.args()).await?;
        if !exit.success() {
            self.log_port
                .error(&format!(
                    "Transcoder failed on {} with {}",
                    request.output.display(),
                    exit
                ))
                .await;
            return Err(DomainError::TranscoderFailed {
                clip,
                total,
                output: request.output.clone(),
                status: exit,
            });
        }

        Ok(())
    }
}
