//! Question bank sources.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::repository::{BankSource, StorageError};

/// Bank text compiled into the binary, the moral equivalent of a bundled
/// app resource.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedBank {
    text: &'static str,
}

impl EmbeddedBank {
    #[must_use]
    pub fn new(text: &'static str) -> Self {
        Self { text }
    }
}

#[async_trait]
impl BankSource for EmbeddedBank {
    async fn load_text(&self) -> Result<String, StorageError> {
        Ok(self.text.to_owned())
    }
}

/// Bank text read from a file on disk.
#[derive(Debug, Clone)]
pub struct FileBank {
    path: PathBuf,
}

impl FileBank {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl BankSource for FileBank {
    async fn load_text(&self) -> Result<String, StorageError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    StorageError::ResourceNotFound(self.path.display().to_string())
                }
                _ => StorageError::Io(e.to_string()),
            })
    }
}
