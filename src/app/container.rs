// Application container - Wires adapters into the interactor once per process

use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, LocalFsAdapter, TracingLogAdapter};
use crate::app::clip_interactor::ClipInteractor;
use crate::config_initialization::Settings;
use crate::engine::ClipExecutor;
use crate::ports::{FsPort, LogPort, ProcessRunner};

pub trait AppContainer: Send + Sync {
    fn clip_interactor(&self) -> Arc<ClipInteractor>;
}

pub struct DefaultAppContainer {
    clip_interactor: Arc<ClipInteractor>,
}

impl DefaultAppContainer {
    /// Build the production wiring around an already initialized logger
    pub fn new(settings: &Settings, log_adapter: TracingLogAdapter) -> Self {
        let runner: Arc<dyn ProcessRunner> = Arc::new(FFmpegAdapter::new());
        let fs_port: Arc<dyn FsPort> = Arc::new(LocalFsAdapter::new());
        let log_port: Arc<dyn LogPort> = Arc::new(log_adapter);

        Self::with_ports(settings, runner, fs_port, log_port)
    }

    /// Build the wiring around arbitrary port implementations
    pub fn with_ports(
        settings: &Settings,
        runner: Arc<dyn ProcessRunner>,
        fs_port: Arc<dyn FsPort>,
        log_port: Arc<dyn LogPort>,
    ) -> Self {
        let executor = ClipExecutor::new(
            settings.transcoder.clone(),
            runner,
            Arc::clone(&log_port),
        );
        let clip_interactor = Arc::new(ClipInteractor::new(executor, fs_port, log_port));

        Self { clip_interactor }
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_interactor(&self) -> Arc<ClipInteractor> {
        Arc::clone(&self.clip_interactor)
    }
}
