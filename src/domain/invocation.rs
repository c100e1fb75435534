//! Invocation configuration: the record handed to the runner

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::task::{Action, EnvMode, Preset};

/// Optional per-invocation settings.
///
/// `None` means "not given", so it never overrides a preset default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub port: Option<u16>,
    pub optimize: Option<bool>,
    pub watch: Option<bool>,
    pub coverage: Option<bool>,
}

impl Overrides {
    /// Overlay wins if Some, otherwise keep self.
    pub fn merge(&self, overlay: &Overrides) -> Self {
        Self {
            port: overlay.port.or(self.port),
            optimize: overlay.optimize.or(self.optimize),
            watch: overlay.watch.or(self.watch),
            coverage: overlay.coverage.or(self.coverage),
        }
    }
}

/// Merged flag/environment record for one CLI call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationConfig {
    pub env: EnvMode,
    pub action: Action,
    pub optimize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub watch: bool,
    pub coverage: bool,
    pub project_path: PathBuf,
}

impl InvocationConfig {
    /// Build the configuration for one invocation.
    ///
    /// Preset defaults first, then CLI flags; `action` and `project_path`
    /// always come from the dispatcher.
    pub fn merge(preset: &Preset, flags: &Overrides, project_path: PathBuf) -> Self {
        let merged = preset.defaults.merge(flags);
        Self {
            env: preset.env,
            action: preset.action,
            optimize: merged.optimize.unwrap_or(false),
            port: merged.port,
            watch: merged.watch.unwrap_or(false),
            coverage: merged.coverage.unwrap_or(false),
            project_path,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
