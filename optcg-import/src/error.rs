use optcg_catalog::JsonWriteError;
use thiserror::Error;

/// Fatal errors from a catalog build. Per-file problems never surface here.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(String),

    #[error("Source path is not a directory: {0}")]
    NotADirectory(String),

    #[error(transparent)]
    Write(#[from] JsonWriteError),
}
