//! Process-backed runner
//!
//! Validates the project, then hands the invocation to the configured runner
//! program as a child process.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{InvocationConfig, StartupError};
use crate::infrastructure::error::{RunFailure, RunResult};
use crate::infrastructure::traits::{
    CommandRunner, CommandSpec, FileSystem, Runner, RunnerFactory,
};

/// Environment variable carrying the environment mode to the runner.
pub const ENV_MODE_VAR: &str = "NODE_ENV";

/// Environment variable carrying the JSON invocation configuration.
pub const INVOCATION_VAR: &str = "SAGUI_INVOCATION";

/// Creates [`ProcessRunner`]s for valid projects.
pub struct ProcessRunnerFactory {
    settings: Arc<Settings>,
    fs: Arc<dyn FileSystem>,
    cmd: Arc<dyn CommandRunner>,
}

impl ProcessRunnerFactory {
    pub fn new(
        settings: Arc<Settings>,
        fs: Arc<dyn FileSystem>,
        cmd: Arc<dyn CommandRunner>,
    ) -> Self {
        Self { settings, fs, cmd }
    }

    /// Check that `project` is a directory holding a readable JSON manifest.
    fn validate_project(&self, project: &Path) -> ApplicationResult<()> {
        if !self.fs.is_dir(project) {
            return Err(StartupError::InvalidProjectPath(project.to_path_buf()).into());
        }

        let manifest = project.join(&self.settings.manifest);
        if !self.fs.is_file(&manifest) {
            return Err(StartupError::MissingManifest(manifest).into());
        }

        let content = self
            .fs
            .read_to_string(&manifest)
            .with_path_context("read manifest", &manifest)?;
        let parsed: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| ApplicationError::OperationFailed {
                context: format!("parse manifest: {}", manifest.display()),
                source: Box::new(e),
            })?;
        if let Some(name) = parsed.get("name").and_then(|n| n.as_str()) {
            debug!("validate_project: project={}", name);
        }
        Ok(())
    }
}

impl RunnerFactory for ProcessRunnerFactory {
    #[instrument(skip(self, config), fields(action = %config.action))]
    fn create(&self, config: InvocationConfig) -> ApplicationResult<Box<dyn Runner>> {
        self.validate_project(&config.project_path)?;

        let invocation = config
            .to_json()
            .map_err(|e| ApplicationError::OperationFailed {
                context: "serialize invocation".to_string(),
                source: Box::new(e),
            })?;

        let mut args = self.settings.runner_args.clone();
        args.push(config.action.id().to_string());

        let spec = CommandSpec {
            program: self.settings.runner.clone(),
            args,
            envs: vec![
                (ENV_MODE_VAR.to_string(), config.env.to_string()),
                (INVOCATION_VAR.to_string(), invocation),
            ],
            cwd: config.project_path.clone(),
        };
        debug!("create: {:?}", spec);

        Ok(Box::new(ProcessRunner {
            spec,
            cmd: Arc::clone(&self.cmd),
        }))
    }
}

/// Runs one prepared command to completion.
pub struct ProcessRunner {
    spec: CommandSpec,
    cmd: Arc<dyn CommandRunner>,
}

impl Runner for ProcessRunner {
    fn run(&self) -> RunResult {
        let status = self
            .cmd
            .status(&self.spec)
            .map_err(|e| RunFailure::spawn(&self.spec.program, e))?;
        debug!("run: status={:?}", status.code);
        if status.success() {
            Ok(())
        } else {
            Err(RunFailure::Exited { code: status.code })
        }
    }
}
