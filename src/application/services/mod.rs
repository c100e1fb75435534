//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, RunnerFactory, etc.)
//! but are themselves concrete structs, not traits.

mod dispatch;
mod project;

pub use dispatch::{DispatchService, RunStatus};
pub use project::{installing_project, ProjectLocator};
