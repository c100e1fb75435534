//! Domain layer: tasks, presets and the invocation configuration
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod invocation;
pub mod task;

pub use error::StartupError;
pub use invocation::{InvocationConfig, Overrides};
pub use task::{expand_env_vars, Action, EnvMode, Preset, Task};
