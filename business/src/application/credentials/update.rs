use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::credentials::env_file::{EnvKey, backup_file_name, rewrite_env};
use crate::domain::credentials::errors::CredentialError;
use crate::domain::credentials::model::ServiceAccountDescriptor;
use crate::domain::credentials::reporter::ProgressReporter;
use crate::domain::credentials::repository::{
    CopyOutcome, CredentialFileRepository, EnvFileRepository,
};
use crate::domain::credentials::use_cases::update::{
    CredentialFileMode, UpdateCredentialsParams, UpdateCredentialsUseCase, UpdateReport,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

enum CredentialSource {
    File(PathBuf),
    Inline,
}

pub struct UpdateCredentialsUseCaseImpl {
    pub env_repository: Arc<dyn EnvFileRepository>,
    pub credential_repository: Arc<dyn CredentialFileRepository>,
    pub reporter: Arc<dyn ProgressReporter>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCredentialsUseCaseImpl {
    fn load_descriptor(
        &self,
        input: &str,
    ) -> Result<(CredentialSource, ServiceAccountDescriptor), CredentialError> {
        if self.credential_repository.is_file(input) {
            let path = PathBuf::from(input);
            self.logger
                .debug(&format!("Reading service account from {}", path.display()));
            let raw = self.credential_repository.read(&path)?;
            let descriptor = ServiceAccountDescriptor::parse(&raw)?;
            return Ok((CredentialSource::File(path), descriptor));
        }

        self.logger.debug("Parsing service account from inline content");
        let descriptor = ServiceAccountDescriptor::parse(input)?;
        Ok((CredentialSource::Inline, descriptor))
    }

    /// Re-reads `.env` and checks the rewritten keys hold the descriptor values.
    fn verify_env(&self, descriptor: &ServiceAccountDescriptor, missing: &[EnvKey]) -> bool {
        let variables = match self.env_repository.load_variables() {
            Ok(variables) => variables,
            Err(e) => {
                self.logger
                    .warn(&format!("Could not re-read .env for verification: {}", e));
                return false;
            }
        };

        let mut verified = true;
        for key in EnvKey::ALL.iter().filter(|key| !missing.contains(*key)) {
            let found = variables
                .iter()
                .find(|(name, _)| name == key.name())
                .map(|(_, value)| value.as_str());
            if found != Some(key.value(descriptor)) {
                self.logger
                    .warn(&format!("{} does not read back as written", key));
                verified = false;
            }
        }
        verified
    }

    fn persist_credential(
        &self,
        source: &CredentialSource,
        descriptor: &ServiceAccountDescriptor,
    ) -> Result<(String, CredentialFileMode), CredentialError> {
        match source {
            CredentialSource::File(path) => {
                let file_name = file_name_of(path)?;
                let mode = match self.credential_repository.copy_into_root(path, &file_name)? {
                    CopyOutcome::Copied => CredentialFileMode::Copied,
                    CopyOutcome::AlreadyInPlace => {
                        self.logger.info(&format!(
                            "{} is already in the project root, not copying",
                            file_name
                        ));
                        CredentialFileMode::AlreadyInPlace
                    }
                };
                self.reporter.credential_copied(&file_name);
                Ok((file_name, mode))
            }
            CredentialSource::Inline => {
                let file_name = descriptor.persisted_file_name();
                let json = descriptor.to_pretty_json()?;
                self.credential_repository.write(&file_name, &json)?;
                self.reporter.credential_saved(&file_name);
                Ok((file_name, CredentialFileMode::Serialized))
            }
        }
    }
}

impl UpdateCredentialsUseCase for UpdateCredentialsUseCaseImpl {
    fn execute(&self, params: UpdateCredentialsParams) -> Result<UpdateReport, CredentialError> {
        let (source, descriptor) = self.load_descriptor(&params.input)?;
        let summary = descriptor.summary();
        self.logger.info(&format!(
            "Loaded service account {} for project {}",
            summary.client_email, summary.project_id
        ));
        self.reporter.descriptor_loaded(&summary);

        let backup_file = if self.env_repository.exists() {
            let name = backup_file_name(&params.requested_at);
            self.env_repository.backup(&name)?;
            self.reporter.env_backed_up(&name);
            Some(name)
        } else {
            None
        };

        self.reporter.env_update_started();
        let content = self.env_repository.read().map_err(|e| match e {
            RepositoryError::NotFound { path } => CredentialError::EnvFileNotFound(path),
            other => CredentialError::Repository(other),
        })?;

        let rewrite = rewrite_env(&content, &descriptor);
        for key in &rewrite.missing {
            self.logger
                .warn(&format!("{} is not present in .env, leaving it absent", key));
        }
        self.env_repository.write(&rewrite.content)?;
        let verified = self.verify_env(&descriptor, &rewrite.missing);
        self.reporter.env_updated();

        let (credential_file, credential_mode) = self
            .persist_credential(&source, &descriptor)
            .inspect_err(|e| {
                let restore = backup_file.as_deref().unwrap_or("no backup was taken");
                self.logger.error(&format!(
                    ".env was rewritten but the credential file was not stored ({}); restore from: {}",
                    e, restore
                ));
            })?;

        self.logger
            .info(&format!("Credentials updated, JSON stored as {}", credential_file));
        Ok(UpdateReport {
            summary,
            backup_file,
            missing_keys: rewrite.missing,
            verified,
            credential_file,
            credential_mode,
        })
    }
}

fn file_name_of(path: &Path) -> Result<String, CredentialError> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CredentialError::InvalidSource(path.display().to_string()))
}
