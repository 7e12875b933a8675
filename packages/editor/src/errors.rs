//! Error types for the editor

use codestudio_common::CommonError;
use codestudio_export::ArchiveError;
use codestudio_preview::RenderError;
use codestudio_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("No project is active")]
    NoActiveProject,

    #[error("Project '{0}' not found")]
    ProjectNotFound(String),

    #[error("Archive generation failed: {0}")]
    ArchiveGeneration(#[from] ArchiveError),

    #[error("{0}")]
    FileRead(#[source] CommonError),

    #[error("Preview error: {0}")]
    Render(#[from] RenderError),

    #[error("Storage error: {0}")]
    Store(#[source] StoreError),
}

impl From<StoreError> for PlaygroundError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::EmptyName => PlaygroundError::EmptyName,
            other => PlaygroundError::Store(other),
        }
    }
}

impl PlaygroundError {
    /// Short headline for the notification raised by this error
    pub fn title(&self) -> &'static str {
        match self {
            PlaygroundError::EmptyName => "Enter a project name",
            PlaygroundError::NoActiveProject => "No project selected",
            PlaygroundError::ProjectNotFound(_) => "Project not found",
            PlaygroundError::ArchiveGeneration(_) => "Export failed",
            PlaygroundError::FileRead(_) => "Could not read file",
            PlaygroundError::Render(_) => "Preview failed",
            PlaygroundError::Store(_) => "Could not save projects",
        }
    }
}
