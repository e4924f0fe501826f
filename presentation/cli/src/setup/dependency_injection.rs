use std::io::{self, Stdout};
use std::sync::Arc;

use filesystem::ProjectFilesystem;
use logger::TracingLogger;

use business::application::credentials::update::UpdateCredentialsUseCaseImpl;
use business::domain::credentials::use_cases::update::UpdateCredentialsUseCase;

use crate::config::app_config::AppConfig;
use crate::console::reporter::ConsoleReporter;

pub struct DependencyContainer {
    pub update_credentials: Arc<dyn UpdateCredentialsUseCase>,
    pub reporter: Arc<ConsoleReporter<Stdout>>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger::new(config.project.root.clone()));
        let reporter = Arc::new(ConsoleReporter::new(io::stdout()));

        // Infrastructure adapters
        let project = Arc::new(ProjectFilesystem::new(config.project.root.clone()));
        tracing::debug!(root = %project.root().display(), "Project root resolved");

        let update_credentials = Arc::new(UpdateCredentialsUseCaseImpl {
            env_repository: project.clone(),
            credential_repository: project,
            reporter: reporter.clone(),
            logger,
        });

        Self {
            update_credentials,
            reporter,
        }
    }
}
