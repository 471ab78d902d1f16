//! Startup error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the word list or dictionary at startup.
///
/// These are fatal: `main` reports them and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was readable but held no usable words.
    #[error("'{}' contains no usable words", .path.display())]
    Empty { path: PathBuf },
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for asset loading.
pub type LoadResult<T> = Result<T, LoadError>;
