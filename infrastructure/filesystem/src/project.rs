use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::credentials::env_file::ENV_FILE_NAME;
use business::domain::credentials::repository::{
    CopyOutcome, CredentialFileRepository, EnvFileRepository,
};
use business::domain::errors::RepositoryError;

/// Files of one project, addressed relative to its root directory.
pub struct ProjectFilesystem {
    root: PathBuf,
}

impl ProjectFilesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE_NAME)
    }
}

fn read_file(path: &Path) -> Result<String, RepositoryError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RepositoryError::not_found(path.display().to_string()),
        _ => RepositoryError::read_failed(path.display().to_string(), e),
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), RepositoryError> {
    fs::write(path, contents)
        .map_err(|e| RepositoryError::write_failed(path.display().to_string(), e))
}

fn copy_file(from: &Path, to: &Path) -> Result<(), RepositoryError> {
    fs::copy(from, to).map(|_| ()).map_err(|e| {
        RepositoryError::copy_failed(from.display().to_string(), to.display().to_string(), e)
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

impl EnvFileRepository for ProjectFilesystem {
    fn exists(&self) -> bool {
        self.env_path().exists()
    }

    fn read(&self) -> Result<String, RepositoryError> {
        read_file(&self.env_path())
    }

    fn write(&self, content: &str) -> Result<(), RepositoryError> {
        let path = self.env_path();
        tracing::debug!(path = %path.display(), bytes = content.len(), "Rewriting env file");
        write_file(&path, content)
    }

    fn backup(&self, file_name: &str) -> Result<(), RepositoryError> {
        let backup = self.root.join(file_name);
        tracing::debug!(backup = %backup.display(), "Backing up env file");
        copy_file(&self.env_path(), &backup)
    }

    fn load_variables(&self) -> Result<Vec<(String, String)>, RepositoryError> {
        let path = self.env_path();
        let display = path.display().to_string();
        dotenvy::from_path_iter(&path)
            .map_err(|e| RepositoryError::parse_failed(display.clone(), e))?
            .map(|item| item.map_err(|e| RepositoryError::parse_failed(display.clone(), e)))
            .collect()
    }
}

impl CredentialFileRepository for ProjectFilesystem {
    fn is_file(&self, input: &str) -> bool {
        Path::new(input).is_file()
    }

    fn read(&self, path: &Path) -> Result<String, RepositoryError> {
        read_file(path)
    }

    fn copy_into_root(
        &self,
        source: &Path,
        file_name: &str,
    ) -> Result<CopyOutcome, RepositoryError> {
        let destination = self.root.join(file_name);
        if same_file(source, &destination) {
            return Ok(CopyOutcome::AlreadyInPlace);
        }
        tracing::debug!(
            source = %source.display(),
            destination = %destination.display(),
            "Copying credential file"
        );
        copy_file(source, &destination)?;
        Ok(CopyOutcome::Copied)
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<(), RepositoryError> {
        let destination = self.root.join(file_name);
        tracing::debug!(destination = %destination.display(), "Writing credential file");
        write_file(&destination, contents)
    }
}
