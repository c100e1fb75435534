//! Domain-level errors (no external dependencies)

use std::path::PathBuf;
use thiserror::Error;

/// Errors a runner raises while it is being set up for a project.
///
/// Both kinds mean "this is not a project we can act on" and are reported
/// as warnings rather than crashes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StartupError {
    #[error("invalid project path: {0}")]
    InvalidProjectPath(PathBuf),

    #[error("missing manifest: {0}")]
    MissingManifest(PathBuf),
}
