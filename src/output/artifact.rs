//! Rendered files and where they go.

use std::fs;
use std::io;
use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

/// A generated file, path relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self { path: path.into(), contents: contents.into() }
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Destination for rendered files.
pub trait ArtifactSink {
    /// # Errors
    /// When the file cannot be persisted.
    fn write(&mut self, file: &RenderedFile) -> Result<(), SinkError>;
}

/// Collects files in memory.
impl ArtifactSink for Vec<RenderedFile> {
    fn write(&mut self, file: &RenderedFile) -> Result<(), SinkError> {
        self.push(file.clone());
        Ok(())
    }
}

/// Writes files under an output root, creating parent directories as needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    /// Output root.
    root: PathBuf,
    /// Paths of the written files, in write order.
    written: Vec<PathBuf>,
}

impl DirectorySink {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), written: Vec::new() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths written so far, in write order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ArtifactSink for DirectorySink {
    fn write(&mut self, file: &RenderedFile) -> Result<(), SinkError> {
        let target = self.root.join(&file.path);

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|source| SinkError::CreateDir { path: parent.to_path_buf(), source })?;
        }

        fs::write(&target, &file.contents)
            .map_err(|source| SinkError::Write { path: target.clone(), source })?;

        tracing::debug!("Wrote {}", target.display());
        self.written.push(target);
        Ok(())
    }
}
