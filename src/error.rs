use std::io;

use thiserror::Error;

/// Library-wide error type for repository operations.
///
/// Generic I/O failures pass through verbatim; the repository adds no
/// retries, no logging, and no recoverable/fatal judgment of its own.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Target path (or the repository root at construction) does not exist.
    #[error("path does not exist: {0}")]
    NotExist(String),

    /// Repository root exists but is not a directory.
    #[error("path is not a directory: {0}")]
    NotDirectory(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RepositoryError {
    /// Provide an `io::ErrorKind` view for callers matching on kinds.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            RepositoryError::Io(err) => err.kind(),
            RepositoryError::NotExist(_) => io::ErrorKind::NotFound,
            RepositoryError::NotDirectory(_) => io::ErrorKind::NotADirectory,
        }
    }
}
