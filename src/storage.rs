//! Blob store for uploaded nameplate photos.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to store image at {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create upload directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes uploaded photos under a flat directory and hands back the stored
/// path for persistence on the machine record.
#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn ensure_dir(&self) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.root).map_err(|source| StorageError::CreateDir {
            path: self.root.clone(),
            source,
        })
    }

    /// Stores image bytes as `{stem}_{timestamp}.jpg` and returns the path
    /// as it is persisted and served.
    pub fn save(&self, stem: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let filename = format!("{stem}_{}.jpg", Local::now().format("%Y%m%d%H%M%S"));
        let path = self.root.join(&filename);
        std::fs::write(&path, bytes).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path.to_string_lossy().into_owned())
    }

    /// Absolute location of a previously stored file name.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
