//! Configuration directory resolution.
//!
//! A named configuration directory is `<base>/<name>`, where `<base>`
//! comes from a [`BaseDirSource`] and `<name>` identifies the
//! application.  The resolver can check whether the directory exists and
//! create it idempotently; it never deletes anything.

pub mod provider;

pub use provider::{BaseDirSource, FixedDir, PlatformDirs};

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ConfigError;

/// Resolves, checks, and creates per-application configuration directories.
///
/// The base-directory lookup is supplied at construction, so two
/// resolvers over different sources can coexist in one process and tests
/// never have to mutate shared state.
///
/// # Examples
///
/// ```no_run
/// use confkit_core::DirResolver;
///
/// # fn main() -> Result<(), confkit_core::ConfigError> {
/// let resolver = DirResolver::platform();
/// let dir = resolver.ensure("my-app")?;
/// assert!(dir.ends_with("my-app"));
/// # Ok(())
/// # }
/// ```
pub struct DirResolver {
    source: Box<dyn BaseDirSource>,
}

impl DirResolver {
    /// Creates a resolver over the platform environment lookup.
    pub fn platform() -> Self {
        Self::with_source(Box::new(PlatformDirs))
    }

    /// Creates a resolver over an arbitrary base-directory source.
    pub fn with_source(source: Box<dyn BaseDirSource>) -> Self {
        Self { source }
    }

    /// Creates a resolver with the base directory pinned to `base`.
    ///
    /// Shorthand for [`with_source`](Self::with_source) over a
    /// [`FixedDir`].
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        Self::with_source(Box::new(FixedDir::new(base)))
    }

    /// Resolves the configuration directory for the application `name`.
    ///
    /// Pure path computation: the returned directory may or may not
    /// exist on disk.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when the underlying
    /// source cannot determine the base directory.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let base = self
            .source
            .base_dir()
            .ok_or(ConfigError::NoPlatformConfigDir)?;
        Ok(base.join(name))
    }

    /// Reports whether the configuration directory for `name` exists.
    ///
    /// A missing path is an ordinary `Ok(false)`.  A path occupied by
    /// something other than a directory is an error rather than `false`:
    /// the caller would otherwise go on to create or populate a location
    /// it can never use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when resolution
    /// fails, [`ConfigError::NotADirectory`] when a non-directory
    /// occupies the path, and [`ConfigError::Io`] for any stat failure
    /// other than not-found.
    pub fn exists(&self, name: &str) -> Result<bool, ConfigError> {
        let dir = self.resolve(name)?;
        match fs::metadata(&dir) {
            Ok(meta) if meta.is_dir() => Ok(true),
            Ok(_) => Err(ConfigError::NotADirectory(dir)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(ConfigError::io(dir, source)),
        }
    }

    /// Resolves the configuration directory for `name`, creating it and
    /// any missing parents when it does not exist yet.
    ///
    /// Idempotent: an existing directory is returned unchanged with its
    /// contents intact.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when resolution
    /// fails, [`ConfigError::NotADirectory`] when a non-directory
    /// occupies the path, and [`ConfigError::Io`] when the existence
    /// check or the creation fails.
    pub fn ensure(&self, name: &str) -> Result<PathBuf, ConfigError> {
        let dir = self.resolve(name)?;
        if !self.exists(name)? {
            fs::create_dir_all(&dir).map_err(|source| ConfigError::io(&dir, source))?;
            debug!("created config directory {}", dir.display());
        }
        Ok(dir)
    }
}

impl Default for DirResolver {
    fn default() -> Self {
        Self::platform()
    }
}
