use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Where the project's `.env` and credential files live.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub root: PathBuf,
}

impl ProjectConfig {
    /// Uses the explicit root when given, otherwise the parent of the
    /// directory holding the executable (the tool ships in `<root>/scripts/`).
    ///
    /// # Errors
    /// Returns error if the executable path cannot be determined or has no grandparent
    pub fn resolve(explicit_root: Option<PathBuf>) -> anyhow::Result<Self> {
        if let Some(root) = explicit_root {
            return Ok(Self { root });
        }

        let executable = env::current_exe().context("cannot locate the running executable")?;
        let root = root_from_executable(&executable).with_context(|| {
            format!(
                "cannot derive a project root from {}",
                executable.display()
            )
        })?;
        Ok(Self { root })
    }
}

fn root_from_executable(executable: &Path) -> Option<PathBuf> {
    executable
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
}
