//! Tasks, actions and environment modes
//!
//! A [`Task`] is what the user asks for on the command line. Each task maps to a
//! [`Preset`]: the environment mode it runs under, the runner [`Action`] it
//! selects, and any defaults it forces (e.g. `dist` always optimizes).

use std::fmt;

use serde::Serialize;

use crate::domain::invocation::Overrides;

/// Environment mode the runner is started in (the `NODE_ENV` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    Development,
    Production,
    Test,
}

impl EnvMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvMode::Development => "development",
            EnvMode::Production => "production",
            EnvMode::Test => "test",
        }
    }
}

impl fmt::Display for EnvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of the job the runner performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    #[serde(rename = "develop")]
    Develop,
    #[serde(rename = "build")]
    Build,
    #[serde(rename = "test:unit")]
    TestUnit,
    #[serde(rename = "test:lint")]
    TestLint,
    #[serde(rename = "test:typecheck")]
    TestTypecheck,
    #[serde(rename = "update")]
    Update,
}

impl Action {
    /// Wire identifier handed to the runner.
    pub fn id(&self) -> &'static str {
        match self {
            Action::Develop => "develop",
            Action::Build => "build",
            Action::TestUnit => "test:unit",
            Action::TestLint => "test:lint",
            Action::TestTypecheck => "test:typecheck",
            Action::Update => "update",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A dispatchable CLI task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    Develop,
    Build,
    Dist,
    TestUnit,
    TestLint,
    TestTypecheck,
    Update,
}

/// Base configuration a task starts from before CLI flags are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub env: EnvMode,
    pub action: Action,
    pub defaults: Overrides,
}

impl Task {
    pub const ALL: [Task; 7] = [
        Task::Develop,
        Task::Build,
        Task::Dist,
        Task::TestUnit,
        Task::TestLint,
        Task::TestTypecheck,
        Task::Update,
    ];

    /// Command name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Task::Develop => "develop",
            Task::Build => "build",
            Task::Dist => "dist",
            Task::TestUnit => "test:unit",
            Task::TestLint => "test:lint",
            Task::TestTypecheck => "test:typecheck",
            Task::Update => "update",
        }
    }

    pub fn preset(&self) -> Preset {
        let (env, action, defaults) = match self {
            Task::Develop => (EnvMode::Development, Action::Develop, Overrides::default()),
            Task::Build => (EnvMode::Development, Action::Build, Overrides::default()),
            Task::Dist => (
                EnvMode::Production,
                Action::Build,
                Overrides {
                    optimize: Some(true),
                    ..Overrides::default()
                },
            ),
            Task::TestUnit => (EnvMode::Test, Action::TestUnit, Overrides::default()),
            Task::TestLint => (EnvMode::Test, Action::TestLint, Overrides::default()),
            Task::TestTypecheck => (EnvMode::Test, Action::TestTypecheck, Overrides::default()),
            Task::Update => (EnvMode::Development, Action::Update, Overrides::default()),
        };
        Preset {
            env,
            action,
            defaults,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
///
/// Falls back to the input unchanged if a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
