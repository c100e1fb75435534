//! Command dispatch: maps a parsed [`Cli`] to services and an [`Outcome`]
//!
//! Nothing in here exits the process; `main` turns the returned outcome into
//! an exit status.

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use tracing::{debug, info, instrument};

use crate::application::services::{ProjectLocator, RunStatus};
use crate::application::{ApplicationError, Severity};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{Overrides, Task};
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::RunFailure;

/// Result of one CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No command given; help was shown
    Help,
    /// Runner (or auxiliary command) completed
    Succeeded,
    /// Runner started and failed
    Failed,
    /// Not a usable project; warned and did nothing
    Skipped,
    /// Could not start, or an auxiliary command failed
    Aborted { code: i32 },
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Help | Outcome::Succeeded | Outcome::Skipped => exitcode::OK,
            Outcome::Failed => exitcode::FAILURE,
            Outcome::Aborted { code } => *code,
        }
    }
}

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> Outcome {
    let Some(command) = &cli.command else {
        output::info(&Cli::command().render_help());
        return Outcome::Help;
    };

    if let Some((task, flags)) = command.task() {
        return run_task(cli, container, task, &flags);
    }

    let result = match command {
        Commands::Config { command } => cmd_config(container, command),
        Commands::Completion { shell } => cmd_completion(*shell),
        _ => Ok(()),
    };
    match result {
        Ok(()) => Outcome::Succeeded,
        Err(e) => {
            output::error(&e);
            Outcome::Aborted {
                code: e.exit_code(),
            }
        }
    }
}

#[instrument(skip(cli, container, flags))]
fn run_task(cli: &Cli, container: &ServiceContainer, task: Task, flags: &Overrides) -> Outcome {
    let project_path = match project_path(cli, &container.settings) {
        Ok(path) => path,
        Err(e) => return report_startup(ApplicationError::OperationFailed {
            context: "determine current directory".to_string(),
            source: Box::new(e),
        }),
    };

    let service = container.dispatch_service();
    match service.dispatch(task, flags, project_path) {
        Ok(RunStatus::Succeeded) => {
            debug!("run_task: {} succeeded", task);
            Outcome::Succeeded
        }
        Ok(RunStatus::Failed(failure)) => {
            report_failure(task, &failure);
            Outcome::Failed
        }
        Err(e) => report_startup(e),
    }
}

fn project_path(cli: &Cli, settings: &Settings) -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let locator = ProjectLocator {
        explicit: cli.project_dir.clone(),
        link: cli.link,
        configured: settings.project_dir.clone(),
        executable: std::env::current_exe().ok(),
    };
    Ok(locator.resolve(&cwd))
}

/// Warn on recoverable startup errors, report fatal ones with their causes.
fn report_startup(e: ApplicationError) -> Outcome {
    match e.severity() {
        Severity::Recoverable => {
            debug!("startup skipped: {}", e);
            output::warning(&e);
            Outcome::Skipped
        }
        Severity::Fatal => {
            debug!("startup failed: {}", e);
            output::error("Error starting up");
            report_chain(&e);
            Outcome::Aborted {
                code: exitcode::FAILURE,
            }
        }
    }
}

fn report_failure(task: Task, failure: &RunFailure) {
    info!("{} failed: {}", task, failure);
    // An exiting runner has already reported its own errors.
    if let RunFailure::Spawn { .. } = failure {
        report_chain(failure);
    }
}

fn report_chain(e: &dyn std::error::Error) {
    output::error(e);
    let mut source = e.source();
    while let Some(cause) = source {
        output::cause(cause);
        source = cause.source();
    }
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            output::info(&container.settings.to_toml()?);
            Ok(())
        }
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::info(&path.display()),
                None => output::warning("no config directory available on this platform"),
            }
            Ok(())
        }
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory available on this platform".into())
            })?;
            if container.fs.exists(&path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            container
                .fs
                .ensure_parent(&path)
                .map_err(|e| CliError::io(format!("create {}", path.display()), e))?;
            container
                .fs
                .write(&path, &Settings::template())
                .map_err(|e| CliError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
            Ok(())
        }
    }
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
