//! Runner-level failures

use thiserror::Error;

/// Why a runner did not complete successfully.
///
/// Unlike startup errors these come from a runner that did start, and always
/// map to a failing exit status.
#[derive(Error, Debug)]
pub enum RunFailure {
    #[error("runner exited with {}", describe_exit(.code))]
    Exited { code: Option<i32> },

    #[error("failed to start runner '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunFailure {
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "a signal".to_string(),
    }
}

/// Result of a single runner invocation.
pub type RunResult = Result<(), RunFailure>;
