//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DispatchService;
use crate::config::Settings;
use crate::infrastructure::runner::ProcessRunnerFactory;
use crate::infrastructure::traits::{
    CommandRunner, FileSystem, RealCommandRunner, RealFileSystem, RunnerFactory,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Builds runners for dispatched tasks
    pub runners: Arc<dyn RunnerFactory>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(
            settings,
            Arc::new(RealFileSystem),
            Arc::new(RealCommandRunner),
        )
    }

    /// Create a service container with custom I/O (for testing).
    ///
    /// Runners are process-backed and go through `cmd`.
    pub fn with_deps(
        settings: Settings,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
    ) -> Self {
        let settings = Arc::new(settings);
        let runners = Arc::new(ProcessRunnerFactory::new(
            Arc::clone(&settings),
            Arc::clone(&fs),
            cmd,
        ));

        Self {
            settings,
            fs,
            runners,
        }
    }

    /// Create a service container with a custom runner factory (for testing).
    pub fn with_runners(settings: Settings, runners: Arc<dyn RunnerFactory>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs: Arc::new(RealFileSystem),
            runners,
        }
    }

    pub fn dispatch_service(&self) -> DispatchService {
        DispatchService::new(Arc::clone(&self.runners))
    }
}
