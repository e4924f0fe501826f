use std::path::{Path, PathBuf};

use business::domain::logger::Logger;

const TARGET: &str = "credentials";

/// `Logger` port backed by `tracing`. Every event carries the project root
/// the updater is working on as a `project` field.
pub struct TracingLogger {
    project: PathBuf,
}

impl TracingLogger {
    pub fn new(project: impl Into<PathBuf>) -> Self {
        Self {
            project: project.into(),
        }
    }

    pub fn project(&self) -> &Path {
        &self.project
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!(target: TARGET, project = %self.project.display(), "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: TARGET, project = %self.project.display(), "{}", message);
    }

    // Reached when a run stops after `.env` was already rewritten.
    fn error(&self, message: &str) {
        tracing::error!(target: TARGET, project = %self.project.display(), "{}", message);
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: TARGET, project = %self.project.display(), "{}", message);
    }
}
