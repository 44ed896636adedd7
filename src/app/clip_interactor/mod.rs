// Clip interactor - Orchestrates the multi-clip extraction use case

use std::sync::Arc;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::engine::ClipExecutor;
use crate::ports::*;

/// Interactor that validates a job and extracts its clips one after another
pub struct ClipInteractor {
    executor: ClipExecutor,
    fs_port: Arc<dyn FsPort>,
    log_port: Arc<dyn LogPort>,
}

impl ClipInteractor {
    /// Create new clip interactor with injected ports
    pub fn new(
        executor: ClipExecutor,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        Self {
            executor,
            fs_port,
            log_port,
        }
    }

    /// Extract every clip of `job`.
    ///
    /// All argument problems are reported before the first transcoder is
    /// started. Clips run strictly in order and the first failure stops the
    /// run.
    pub async fn execute(&self, job: ClipJob) -> Result<ClipReport, DomainError> {
        let ClipJob {
            input,
            output,
            timestamps,
            flags,
            check_timestamps,
        } = job;

        self.log_port
            .debug(&format!("Input file : {}", input.display()))
            .await;

        if check_timestamps {
            check_timestamp_grammar(&timestamps)?;
        }
        let pairs = TimestampPairs::new(timestamps)?;
        let target = self.output_target(output).await?;
        let template = resolve_output_template(&input, &target)?;

        if flags.drops_all_streams() {
            self.log_port.warn("The output stream will be empty").await;
        }

        let total = pairs.total();
        let mut report = ClipReport::default();

        for (index, pair) in pairs.enumerate() {
            let clip = index + 1;
            self.log_port
                .info(&format!("Extracting clip {} of {}", clip, total))
                .await;
            self.log_port
                .debug(&format!("Clip timestamps : {}", pair))
                .await;

            let output_path = template.output_path(clip, total);
            self.log_port
                .debug(&format!("Extracting to : {}", output_path.display()))
                .await;

            let request = ClipRequest::new(&input, output_path, pair, flags);
            self.executor.run(&request, clip, total).await?;
            report.outputs.push(request.output);
        }

        Ok(report)
    }

    /// Classify `--outfile` as absent, an existing directory or a file path
    async fn output_target(
        &self,
        output: Option<std::path::PathBuf>,
    ) -> Result<OutputTarget, DomainError> {
        let Some(path) = output else {
            return Ok(OutputTarget::Unspecified);
        };

        if self.fs_port.directory_exists(&path).await? {
            Ok(OutputTarget::Directory(path))
        } else {
            Ok(OutputTarget::File(path))
        }
    }
}
