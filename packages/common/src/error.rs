use std::path::PathBuf;
use thiserror::Error;

/// Common error type shared by every codestudio crate
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
