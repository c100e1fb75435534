//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::StartupError;

/// Whether an error should stop the process with a failing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Reported as a warning; the invocation ends cleanly.
    Recoverable,
    /// Reported with its full cause chain; the invocation fails.
    Fatal,
}

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Startup(#[from] StartupError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn severity(&self) -> Severity {
        match self {
            ApplicationError::Startup(_) => Severity::Recoverable,
            ApplicationError::Config { .. } | ApplicationError::OperationFailed { .. } => {
                Severity::Fatal
            }
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
