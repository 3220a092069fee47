use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("Input file '{}' does not exist.", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read PDF '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to compress content streams of page {page}: {source}")]
    Compression {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read size of '{}': {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file '{}'.", .0.display())]
    VerificationFailed(PathBuf),

    #[error("Output has {actual} pages, expected {expected}")]
    PageCountMismatch { expected: usize, actual: usize },
}

impl OptimizeError {
    /// Errors that the CLI reports with their own message instead of the generic one
    pub fn has_own_message(&self) -> bool {
        matches!(
            self,
            OptimizeError::InputNotFound(_) | OptimizeError::VerificationFailed(_)
        )
    }
}
