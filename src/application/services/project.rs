//! Project path resolution

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Inputs that decide which directory the runner acts on.
///
/// Precedence (highest first):
/// 1. `explicit` (`-C/--project-dir`)
/// 2. `link` (`SAGUI_LINK`): the current working directory
/// 3. `configured` (`project_dir` setting)
/// 4. the project that installed the executable
/// 5. the current working directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectLocator {
    pub explicit: Option<PathBuf>,
    pub link: bool,
    pub configured: Option<PathBuf>,
    pub executable: Option<PathBuf>,
}

impl ProjectLocator {
    /// Resolve the project path. Relative paths are taken from `cwd`.
    pub fn resolve(&self, cwd: &Path) -> PathBuf {
        let resolved = if let Some(explicit) = &self.explicit {
            cwd.join(explicit)
        } else if self.link {
            cwd.to_path_buf()
        } else if let Some(configured) = &self.configured {
            cwd.join(configured)
        } else {
            self.executable
                .as_deref()
                .and_then(installing_project)
                .unwrap_or_else(|| cwd.to_path_buf())
        };
        debug!("resolve: project={}", resolved.display());
        resolved
    }
}

/// Project directory that installed `executable` as a dependency.
///
/// That is the parent of the nearest `node_modules` ancestor, e.g.
/// `/app/node_modules/.bin/sagui` resolves to `/app`.
pub fn installing_project(executable: &Path) -> Option<PathBuf> {
    executable
        .ancestors()
        .find(|p| p.file_name() == Some(OsStr::new("node_modules")))
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}
