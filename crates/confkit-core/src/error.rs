//! Error type shared by every fallible operation in the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by directory resolution and configuration file I/O.
///
/// Filesystem failures are not subdivided: not-found, permission-denied,
/// and everything else arrive as [`ConfigError::Io`] with the original
/// [`std::io::Error`] attached verbatim as the source.  Callers that need
/// to distinguish inspect the source's [`std::io::ErrorKind`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform per-user configuration base directory could not be
    /// determined from the environment.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A directory was expected at this path, but something else occupies it.
    #[error("expected a directory at {0}, found a non-directory")]
    NotADirectory(PathBuf),

    /// A file system I/O error occurred.
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The in-memory buffer was read before any content was loaded,
    /// written, or reset into it.
    #[error("configuration buffer has not been populated")]
    BufferUnset,
}

impl ConfigError {
    /// Wraps an [`std::io::Error`] together with the path it occurred on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
