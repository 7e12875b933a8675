use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to write preview to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can display a composed document
pub trait RenderSurface {
    fn present(&mut self, document: &str) -> Result<(), RenderError>;
}

/// Keeps the last presented document in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    document: Option<String>,
    presents: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// How many times a document was pushed into this surface
    pub fn presents(&self) -> usize {
        self.presents
    }
}

impl RenderSurface for MemorySurface {
    fn present(&mut self, document: &str) -> Result<(), RenderError> {
        self.document = Some(document.to_string());
        self.presents += 1;
        Ok(())
    }
}

/// Writes the document to an `.html` file that a browser can open
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RenderSurface for FileSurface {
    fn present(&mut self, document: &str) -> Result<(), RenderError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, document).map_err(|source| RenderError::Io {
            path: self.path.clone(),
            source,
        })
    }
}
