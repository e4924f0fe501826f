use std::path::PathBuf;

use super::{follow_up_config::FollowUpConfig, project_config::ProjectConfig};

pub struct AppConfig {
    pub project: ProjectConfig,
    pub follow_up: FollowUpConfig,
}

impl AppConfig {
    /// `project_root` comes from `--project-root` or its environment variable.
    pub fn load(project_root: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(Self {
            project: ProjectConfig::resolve(project_root)?,
            follow_up: FollowUpConfig::from_env(),
        })
    }
}
