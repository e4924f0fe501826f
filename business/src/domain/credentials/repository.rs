use std::path::Path;

use crate::domain::errors::RepositoryError;

/// The project's `.env` file.
pub trait EnvFileRepository: Send + Sync {
    fn exists(&self) -> bool;
    /// Fails with `RepositoryError::NotFound` when the file is absent.
    fn read(&self) -> Result<String, RepositoryError>;
    /// Replaces the whole file.
    fn write(&self, content: &str) -> Result<(), RepositoryError>;
    /// Copies the current file byte-for-byte to `file_name` next to it.
    fn backup(&self, file_name: &str) -> Result<(), RepositoryError>;
    /// Parses the file as dotenv and returns its variables in file order.
    fn load_variables(&self) -> Result<Vec<(String, String)>, RepositoryError>;
}

/// Result of copying a credential file into the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Source and destination are the same file; nothing was written.
    AlreadyInPlace,
}

/// Service-account JSON files, on the operator's side and in the project root.
pub trait CredentialFileRepository: Send + Sync {
    /// Whether `input` names an existing regular file.
    fn is_file(&self, input: &str) -> bool;
    fn read(&self, path: &Path) -> Result<String, RepositoryError>;
    /// Copies `source` into the project root as `file_name`, overwriting.
    fn copy_into_root(
        &self,
        source: &Path,
        file_name: &str,
    ) -> Result<CopyOutcome, RepositoryError>;
    /// Writes `contents` to `file_name` in the project root, overwriting.
    fn write(&self, file_name: &str, contents: &str) -> Result<(), RepositoryError>;
}
