/// Repository errors for domain layer.
/// Messages start with a code-style identifier followed by the affected path.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found: {path}")]
    NotFound { path: String },
    #[error("repository.read_failed: {path}: {reason}")]
    ReadFailed { path: String, reason: String },
    #[error("repository.write_failed: {path}: {reason}")]
    WriteFailed { path: String, reason: String },
    #[error("repository.copy_failed: {from} -> {to}: {reason}")]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },
    #[error("repository.parse_failed: {path}: {reason}")]
    ParseFailed { path: String, reason: String },
}

impl RepositoryError {
    pub fn not_found(path: impl Into<String>) -> Self {
        RepositoryError::NotFound { path: path.into() }
    }
    pub fn read_failed(path: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::ReadFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
    pub fn write_failed(path: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::WriteFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
    pub fn copy_failed(from: impl Into<String>, to: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::CopyFailed {
            from: from.into(),
            to: to.into(),
            reason: reason.to_string(),
        }
    }
    pub fn parse_failed(path: impl Into<String>, reason: impl ToString) -> Self {
        RepositoryError::ParseFailed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
