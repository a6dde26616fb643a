//! Generated text artifacts and their write path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for artifact writes.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The outputs directory could not be created.
    #[error("Failed to create outputs dir {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The artifact file itself could not be written.
    #[error("Failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for artifact operations.
pub type WriteResult<T> = Result<T, WriteError>;

/// A rendered text artifact destined for the outputs directory.
///
/// Artifacts are written once, byte-for-byte, and never mutated afterwards.
/// They have no identity beyond their file path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name within the outputs directory (e.g. `symboles_extraits.txt`).
    pub file_name: String,
    /// Full UTF-8 contents of the artifact.
    pub contents: String,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { file_name: file_name.into(), contents: contents.into() }
    }

    /// Write the artifact into `dir`, creating the directory if needed.
    ///
    /// Returns the full path of the written file.
    pub fn write_into(&self, dir: &Path) -> WriteResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .map_err(|source| WriteError::CreateDir { path: dir.to_path_buf(), source })?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)
            .map_err(|source| WriteError::Write { path: path.clone(), source })?;
        Ok(path)
    }
}
