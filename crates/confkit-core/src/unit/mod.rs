//! A single configuration file: an immutable path plus an in-memory buffer.
//!
//! The buffer and the file are synchronized only when the caller says so.
//! [`write`](ConfigUnit::write) touches memory, [`save`](ConfigUnit::save)
//! commits to disk, [`load`](ConfigUnit::load) pulls disk into memory,
//! and [`reset`](ConfigUnit::reset) does both in one step.  Between a
//! write and the following save the two may diverge arbitrarily; that
//! divergence is the working model (edit in memory, commit when ready),
//! not an inconsistency to repair.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// One configuration file and its in-memory buffer.
///
/// The buffer is a tagged state: unset (nothing has ever been loaded,
/// written, or reset into it; reads fail with
/// [`ConfigError::BufferUnset`]) or set, where zero-length content is
/// valid and remains distinguishable from unset.
///
/// Several units may point at the same path with independent buffers.
/// There is no cross-instance coordination: the last one to save wins,
/// and a buffer can go stale relative to disk at any time.  Deleting the
/// backing file does not invalidate a live unit's buffer.
///
/// # Examples
///
/// ```no_run
/// use confkit_core::ConfigUnit;
///
/// # fn main() -> Result<(), confkit_core::ConfigError> {
/// let mut unit = ConfigUnit::new("/tmp/my-app/settings.json");
/// unit.write(b"{\"theme\":\"dark\"}".to_vec());
/// unit.save()?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigUnit {
    /// Where the file lives.  Never changes after construction.
    path: PathBuf,
    /// `None` until something is loaded, written, or reset into it.
    buffer: Option<Vec<u8>>,
}

impl ConfigUnit {
    /// Creates a unit for `path` with an unset buffer.  No disk I/O.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            buffer: None,
        }
    }

    /// Creates a unit for `path` and immediately loads the file into the
    /// buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read; no unit
    /// is returned in that case.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut unit = Self::new(path);
        unit.load()?;
        Ok(unit)
    }

    // ── In-memory operations ──────────────────────────────────────────────────

    /// Replaces the buffer content.  Memory only, nothing touches disk
    /// until [`save`](Self::save).
    pub fn write(&mut self, body: impl Into<Vec<u8>>) {
        self.buffer = Some(body.into());
    }

    /// Re-marks the buffer as unset.  Memory only; the file, if any, is
    /// left as it is.
    pub fn clear(&mut self) {
        self.buffer = None;
    }

    /// Returns the current buffer content.
    ///
    /// An empty-but-set buffer is a successful zero-byte read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::BufferUnset`] when the buffer has never
    /// been populated or was cleared.
    pub fn read(&self) -> Result<&[u8], ConfigError> {
        self.buffer.as_deref().ok_or(ConfigError::BufferUnset)
    }

    /// Returns the path this unit persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ── Disk operations ───────────────────────────────────────────────────────

    /// Writes the current buffer to the file, creating or overwriting it.
    ///
    /// The buffer is not modified.  An unset buffer saves as a
    /// zero-length file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] with the underlying filesystem error
    /// when the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        fs::write(&self.path, self.buffer.as_deref().unwrap_or_default())
            .map_err(|source| ConfigError::io(&self.path, source))
    }

    /// Reads the file into the buffer, replacing any prior content.
    ///
    /// On failure the buffer is left exactly as it was, not cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file does not exist or
    /// cannot be read.
    pub fn load(&mut self) -> Result<(), ConfigError> {
        let body = fs::read(&self.path).map_err(|source| ConfigError::io(&self.path, source))?;
        self.buffer = Some(body);
        Ok(())
    }

    /// Sets the buffer to `body` and writes it to disk in one step.
    ///
    /// The buffer update is unconditional; only the disk write can fail.
    /// After an error the buffer still holds the new value even though
    /// the file does not.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the disk write fails.
    pub fn reset(&mut self, body: impl Into<Vec<u8>>) -> Result<(), ConfigError> {
        self.buffer = Some(body.into());
        self.save()
    }

    /// Removes the file from disk.  The buffer is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file does not exist or
    /// cannot be removed.
    pub fn delete(&self) -> Result<(), ConfigError> {
        fs::remove_file(&self.path).map_err(|source| ConfigError::io(&self.path, source))
    }
}
