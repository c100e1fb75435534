//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/sagui/sagui.toml`
//! 3. Environment variables: `SAGUI_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::expand_env_vars;

/// Unified configuration for sagui.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Runner program that performs the actions (default: sagui-runner)
    pub runner: String,
    /// Arguments placed before the action id
    pub runner_args: Vec<String>,
    /// Project directory used when neither -C nor SAGUI_LINK is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_dir: Option<PathBuf>,
    /// Manifest that marks a directory as a project
    pub manifest: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            runner: "sagui-runner".into(),
            runner_args: vec![],
            project_dir: None,
            manifest: "package.json".into(),
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub runner: Option<String>,
    pub runner_args: Option<Vec<String>>,
    pub project_dir: Option<PathBuf>,
    pub manifest: Option<String>,
}

/// Get the XDG config directory for sagui.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sagui").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("sagui.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        self.runner = expand_env_vars(&self.runner);
        if let Some(dir) = &self.project_dir {
            self.project_dir = Some(PathBuf::from(expand_env_vars(&dir.to_string_lossy())));
        }
    }

    /// Overlay wins if Some, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            runner: overlay.runner.clone().unwrap_or_else(|| self.runner.clone()),
            runner_args: overlay
                .runner_args
                .clone()
                .unwrap_or_else(|| self.runner_args.clone()),
            project_dir: overlay.project_dir.clone().or_else(|| self.project_dir.clone()),
            manifest: overlay
                .manifest
                .clone()
                .unwrap_or_else(|| self.manifest.clone()),
        }
    }

    /// Load settings from the global config location.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `global_path` - Config file to use as the global layer; skipped if absent
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply SAGUI_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("SAGUI")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("runner_args"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("runner") {
            settings.runner = val;
        }
        if let Ok(val) = config.get::<Vec<String>>("runner_args") {
            settings.runner_args = val;
        }
        if let Ok(val) = config.get_string("project_dir") {
            settings.project_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("manifest") {
            settings.manifest = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# sagui configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/sagui/sagui.toml
#   Env:    SAGUI_* environment variables (explicit overrides)

# Runner program performing develop/build/test/update
# runner = "sagui-runner"

# Arguments placed before the action id
# runner_args = []

# Project directory when neither -C nor SAGUI_LINK is given
# project_dir = "~/code/app"

# Manifest file that marks a project directory
# manifest = "package.json"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
