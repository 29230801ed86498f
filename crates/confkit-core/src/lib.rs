//! # confkit-core
//!
//! Per-application configuration persistence: resolves the platform's
//! per-user configuration directory for a named application and manages
//! individual configuration files as an in-memory buffer decoupled from
//! the on-disk representation.
//!
//! The crate deliberately treats configuration content as opaque bytes.
//! Choosing a format, parsing, and validating all belong to the caller;
//! this layer only answers "where does configuration live" and "is the
//! buffer in sync with the file".
//!
//! The crate is split into three modules:
//!
//! - **`dir`** – where configuration lives.  The [`BaseDirSource`]
//!   capability supplies the platform base directory, and [`DirResolver`]
//!   resolves, checks, and idempotently creates the per-application
//!   directory underneath it.
//!
//! - **`unit`** – a single configuration file.  [`ConfigUnit`] couples an
//!   immutable path with a buffer and gives the caller explicit control
//!   over when memory and disk are synchronized.
//!
//! - **`scan`** – bulk loading.  [`load_all`] opens every configuration
//!   file in an application's directory in one pass.
//!
//! All operations are synchronous, blocking calls; the crate spawns no
//! threads and holds no file handle beyond the single call that uses it.

pub mod dir;
pub mod error;
pub mod scan;
pub mod unit;

// Re-export the full public surface at the crate root so callers can
// write `confkit_core::ConfigUnit` instead of `confkit_core::unit::ConfigUnit`.
pub use dir::{BaseDirSource, DirResolver, FixedDir, PlatformDirs};
pub use error::ConfigError;
pub use scan::load_all;
pub use unit::ConfigUnit;
