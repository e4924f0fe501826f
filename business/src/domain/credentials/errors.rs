use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("credentials.invalid_json: {0}")]
    InvalidJson(String),
    #[error("credentials.missing_field: {0}")]
    MissingField(String),
    #[error("credentials.invalid_field: {0} must be a string")]
    InvalidField(String),
    #[error("credentials.invalid_source: {0} has no file name")]
    InvalidSource(String),
    #[error("credentials.env_file_not_found: {0}")]
    EnvFileNotFound(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
