//! Sources for the per-user configuration base directory.
//!
//! The base directory is the platform location under which applications
//! keep their settings:
//!
//! - Windows:  `%APPDATA%` (e.g. `C:\Users\<user>\AppData\Roaming`)
//! - Linux:    `$XDG_CONFIG_HOME`, falling back to `$HOME/.config`
//! - macOS:    `$HOME/Library/Application Support`
//!
//! The lookup is modelled as a capability so nothing in the crate reaches
//! for process-global state: production code hands [`PlatformDirs`] to a
//! resolver, tests and pinned deployment layouts hand it a [`FixedDir`].

use std::path::PathBuf;

/// Capability returning the per-user configuration base directory.
///
/// Returning `None` means the location cannot be determined on this
/// system, for example a stripped container where `HOME` is unset.
pub trait BaseDirSource: Send + Sync {
    /// Returns the base directory, or `None` when it is unavailable.
    fn base_dir(&self) -> Option<PathBuf>;
}

/// Resolves the base directory from the platform environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDirs;

impl BaseDirSource for PlatformDirs {
    fn base_dir(&self) -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var_os("APPDATA").map(PathBuf::from)
        }

        #[cfg(target_os = "linux")]
        {
            std::env::var_os("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        }

        #[cfg(target_os = "macos")]
        {
            std::env::var_os("HOME")
                .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
        }

        #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
        {
            None
        }
    }
}

/// A source that always returns the same directory.
///
/// Stands in for [`PlatformDirs`] in tests, and in deployments that pin
/// configuration to a known location instead of the platform default.
#[derive(Debug, Clone)]
pub struct FixedDir(PathBuf);

impl FixedDir {
    /// Creates a source rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self(base.into())
    }
}

impl BaseDirSource for FixedDir {
    fn base_dir(&self) -> Option<PathBuf> {
        Some(self.0.clone())
    }
}
