use chrono::{DateTime, Local};

use crate::domain::credentials::env_file::EnvKey;
use crate::domain::credentials::errors::CredentialError;
use crate::domain::credentials::model::CredentialSummary;

pub struct UpdateCredentialsParams {
    /// Path to a service-account JSON file, or the JSON text itself.
    pub input: String,
    pub requested_at: DateTime<Local>,
}

/// How the service-account JSON ended up in the project root.
#[derive(Debug, Clone, PartialEq)]
pub enum CredentialFileMode {
    /// Input file copied under its own name.
    Copied,
    /// Input file already was the destination.
    AlreadyInPlace,
    /// Inline content written under a derived name.
    Serialized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub summary: CredentialSummary,
    pub backup_file: Option<String>,
    pub missing_keys: Vec<EnvKey>,
    pub verified: bool,
    pub credential_file: String,
    pub credential_mode: CredentialFileMode,
}

pub trait UpdateCredentialsUseCase: Send + Sync {
    fn execute(&self, params: UpdateCredentialsParams) -> Result<UpdateReport, CredentialError>;
}
