//! Task dispatch service
//!
//! Turns a task plus its flags into an invocation configuration and hands it
//! to a runner.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::ApplicationResult;
use crate::domain::{InvocationConfig, Overrides, Task};
use crate::infrastructure::error::RunFailure;
use crate::infrastructure::traits::RunnerFactory;

/// How a runner that did start finished.
#[derive(Debug)]
pub enum RunStatus {
    Succeeded,
    Failed(RunFailure),
}

/// Service dispatching CLI tasks to the runner.
pub struct DispatchService {
    runners: Arc<dyn RunnerFactory>,
}

impl DispatchService {
    /// Create a new dispatch service.
    pub fn new(runners: Arc<dyn RunnerFactory>) -> Self {
        Self { runners }
    }

    /// Build the configuration `task` runs with.
    pub fn configure(&self, task: Task, flags: &Overrides, project_path: PathBuf) -> InvocationConfig {
        InvocationConfig::merge(&task.preset(), flags, project_path)
    }

    /// Construct a runner for `task` and run it once.
    ///
    /// Errors are startup errors (the runner could not be constructed); a
    /// runner that started and failed is `Ok(RunStatus::Failed)`.
    #[instrument(skip(self, flags, project_path))]
    pub fn dispatch(
        &self,
        task: Task,
        flags: &Overrides,
        project_path: PathBuf,
    ) -> ApplicationResult<RunStatus> {
        let config = self.configure(task, flags, project_path);
        debug!("dispatch: config={:?}", config);

        let runner = self.runners.create(config)?;
        match runner.run() {
            Ok(()) => Ok(RunStatus::Succeeded),
            Err(failure) => {
                debug!("dispatch: runner failed: {}", failure);
                Ok(RunStatus::Failed(failure))
            }
        }
    }
}
