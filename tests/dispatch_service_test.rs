//! Tests for dispatching tasks and mapping results to exit codes

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rstest::rstest;

use sagui::application::{ApplicationError, ApplicationResult};
use sagui::cli::{execute_command, Cli, Outcome};
use sagui::config::Settings;
use sagui::domain::{Action, EnvMode, InvocationConfig, StartupError};
use sagui::infrastructure::di::ServiceContainer;
use sagui::infrastructure::traits::{Runner, RunnerFactory};
use sagui::infrastructure::{RunFailure, RunResult};
use sagui::util::testing::init_test_setup;

/// What the stub does when asked for a runner.
#[derive(Debug, Clone, Copy)]
enum Behavior {
    Succeed,
    Fail,
    InvalidPath,
    MissingManifest,
    Fatal,
}

/// Records every configuration it receives.
struct StubFactory {
    behavior: Behavior,
    created: Mutex<Vec<InvocationConfig>>,
    runs: Arc<Mutex<usize>>,
}

impl StubFactory {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            created: Mutex::new(Vec::new()),
            runs: Arc::new(Mutex::new(0)),
        })
    }

    fn created(&self) -> Vec<InvocationConfig> {
        self.created.lock().unwrap().clone()
    }

    fn runs(&self) -> usize {
        *self.runs.lock().unwrap()
    }
}

struct StubRunner {
    succeed: bool,
    runs: Arc<Mutex<usize>>,
}

impl Runner for StubRunner {
    fn run(&self) -> RunResult {
        *self.runs.lock().unwrap() += 1;
        if self.succeed {
            Ok(())
        } else {
            Err(RunFailure::Exited { code: Some(2) })
        }
    }
}

impl RunnerFactory for StubFactory {
    fn create(&self, config: InvocationConfig) -> ApplicationResult<Box<dyn Runner>> {
        let project = config.project_path.clone();
        self.created.lock().unwrap().push(config);
        let runs = Arc::clone(&self.runs);
        match self.behavior {
            Behavior::Succeed => Ok(Box::new(StubRunner { succeed: true, runs })),
            Behavior::Fail => Ok(Box::new(StubRunner { succeed: false, runs })),
            Behavior::InvalidPath => Err(StartupError::InvalidProjectPath(project).into()),
            Behavior::MissingManifest => {
                Err(StartupError::MissingManifest(project.join("package.json")).into())
            }
            Behavior::Fatal => Err(ApplicationError::OperationFailed {
                context: "read manifest".to_string(),
                source: Box::new(std::io::Error::other("disk on fire")),
            }),
        }
    }
}

fn run(behavior: Behavior, args: &[&str]) -> (Outcome, Arc<StubFactory>) {
    init_test_setup();
    let factory = StubFactory::new(behavior);
    let container = ServiceContainer::with_runners(Settings::default(), factory.clone());
    let cli = Cli::try_parse_from(std::iter::once("sagui").chain(args.iter().copied()))
        .expect("arguments should parse");

    let outcome = execute_command(&cli, &container);
    (outcome, factory)
}

#[test]
fn given_runner_succeeds_when_dispatching_then_exit_zero() {
    // Act
    let (outcome, factory) = run(Behavior::Succeed, &["build", "-C", "/work/app"]);

    // Assert
    assert_eq!(outcome, Outcome::Succeeded);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(factory.runs(), 1);
}

#[test]
fn given_runner_fails_when_dispatching_then_exit_one() {
    let (outcome, factory) = run(Behavior::Fail, &["test:lint", "-C", "/work/app"]);

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(factory.runs(), 1);
}

#[rstest]
#[case(Behavior::InvalidPath)]
#[case(Behavior::MissingManifest)]
fn given_recognized_startup_error_when_dispatching_then_skipped_with_exit_zero(
    #[case] behavior: Behavior,
) {
    let (outcome, factory) = run(behavior, &["develop", "-C", "/work/app"]);

    assert_eq!(outcome, Outcome::Skipped);
    assert_eq!(outcome.exit_code(), 0);
    assert_eq!(factory.runs(), 0, "runner must not run");
}

#[test]
fn given_other_startup_error_when_dispatching_then_aborted_with_exit_one() {
    let (outcome, factory) = run(Behavior::Fatal, &["update", "-C", "/work/app"]);

    assert_eq!(outcome, Outcome::Aborted { code: 1 });
    assert_eq!(outcome.exit_code(), 1);
    assert_eq!(factory.runs(), 0);
}

#[test]
fn given_no_arguments_when_executing_then_help_and_no_runner() {
    let (outcome, factory) = run(Behavior::Succeed, &[]);

    assert_eq!(outcome, Outcome::Help);
    assert_eq!(outcome.exit_code(), 0);
    assert!(factory.created().is_empty(), "no runner may be constructed");
}

#[test]
fn given_explicit_project_dir_when_dispatching_then_runner_receives_it() {
    let (_, factory) = run(Behavior::Succeed, &["dist", "-C", "/work/app"]);

    let created = factory.created();
    assert_eq!(created.len(), 1);
    let config = &created[0];
    assert_eq!(config.project_path, PathBuf::from("/work/app"));
    assert_eq!(config.env, EnvMode::Production);
    assert_eq!(config.action, Action::Build);
    assert!(config.optimize);
}

#[test]
fn given_link_flag_when_dispatching_then_project_is_current_dir() {
    let (_, factory) = run(Behavior::Succeed, &["test:typecheck", "--link"]);

    let created = factory.created();
    assert_eq!(created[0].project_path, std::env::current_dir().unwrap());
}

#[test]
fn given_dispatch_when_env_mode_set_then_process_env_untouched() {
    let before = std::env::var("NODE_ENV").ok();

    let (_, factory) = run(Behavior::Succeed, &["test:unit", "-C", "/work/app"]);

    assert_eq!(factory.created()[0].env, EnvMode::Test);
    assert_eq!(std::env::var("NODE_ENV").ok(), before);
}
