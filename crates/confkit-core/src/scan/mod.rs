//! Bulk discovery and loading of configuration files.
//!
//! Takes a point-in-time snapshot of an application's configuration
//! directory: every regular file becomes a loaded [`ConfigUnit`],
//! subdirectories are skipped, and later changes to the directory are
//! not tracked.

use std::fs;

use tracing::debug;

use crate::dir::DirResolver;
use crate::error::ConfigError;
use crate::unit::ConfigUnit;

/// Loads every configuration file in the directory resolved for `name`.
///
/// Entries come back in whatever order the OS lists them; callers that
/// care about identity should match units by
/// [`path`](ConfigUnit::path), not by position.
///
/// Aggregation is fail-fast: the first entry that cannot be loaded fails
/// the whole call with that entry's error and already-loaded units are
/// discarded.  There is no partial result.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the directory
/// cannot be resolved, and [`ConfigError::Io`] when it cannot be listed
/// (a missing directory included) or any entry cannot be read.
pub fn load_all(resolver: &DirResolver, name: &str) -> Result<Vec<ConfigUnit>, ConfigError> {
    let dir = resolver.resolve(name)?;
    let entries = fs::read_dir(&dir).map_err(|source| ConfigError::io(&dir, source))?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ConfigError::io(&dir, source))?;
        let file_type = entry
            .file_type()
            .map_err(|source| ConfigError::io(entry.path(), source))?;
        if file_type.is_dir() {
            continue;
        }
        units.push(ConfigUnit::open(entry.path())?);
    }

    debug!("loaded {} config file(s) from {}", units.len(), dir.display());
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const APP: &str = "my-app";

    /// Builds a resolver over `tmp`, ensures the app directory, and
    /// seeds it with the given files.
    fn seeded_resolver(tmp: &TempDir, files: &[(&str, &[u8])]) -> DirResolver {
        let resolver = DirResolver::with_base(tmp.path());
        let dir = resolver.ensure(APP).expect("ensure app dir");
        for (file_name, body) in files {
            fs::write(dir.join(file_name), body).expect("seed file");
        }
        resolver
    }

    /// Maps loaded units to (file name, content) for order-independent
    /// comparison.
    fn by_file_name(units: &[ConfigUnit]) -> HashMap<String, Vec<u8>> {
        units
            .iter()
            .map(|unit| {
                let file_name = unit
                    .path()
                    .file_name()
                    .expect("unit path has a file name")
                    .to_string_lossy()
                    .into_owned();
                let body = unit.read().expect("loaded unit must be readable").to_vec();
                (file_name, body)
            })
            .collect()
    }

    #[test]
    fn test_load_all_returns_one_unit_per_file() {
        // Arrange
        let tmp = TempDir::new().expect("create temp dir");
        let resolver = seeded_resolver(
            &tmp,
            &[
                ("config1.json", b"{\"a\":1}" as &[u8]),
                ("config2.json", b"{\"b\":2}"),
            ],
        );

        // Act
        let units = load_all(&resolver, APP).expect("load_all should succeed");

        // Assert - matched by file name, not position
        let loaded = by_file_name(&units);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["config1.json"], b"{\"a\":1}");
        assert_eq!(loaded["config2.json"], b"{\"b\":2}");
    }

    #[test]
    fn test_load_all_on_empty_directory_returns_no_units() {
        // Arrange
        let tmp = TempDir::new().expect("create temp dir");
        let resolver = seeded_resolver(&tmp, &[]);

        // Act
        let units = load_all(&resolver, APP).expect("load_all should succeed");

        // Assert
        assert!(units.is_empty());
    }

    #[test]
    fn test_load_all_skips_subdirectories() {
        // Arrange
        let tmp = TempDir::new().expect("create temp dir");
        let resolver = seeded_resolver(&tmp, &[("app.json", b"{}" as &[u8])]);
        let dir = resolver.resolve(APP).expect("resolve");
        fs::create_dir(dir.join("nested")).expect("mkdir nested");

        // Act
        let units = load_all(&resolver, APP).expect("load_all should succeed");

        // Assert - only the regular file is loaded
        assert_eq!(units.len(), 1);
        assert_eq!(
            units[0].path().file_name(),
            Some(std::ffi::OsStr::new("app.json"))
        );
    }

    #[test]
    fn test_load_all_fails_when_directory_cannot_be_listed() {
        // Arrange - resolvable name, but the directory was never created
        let tmp = TempDir::new().expect("create temp dir");
        let resolver = DirResolver::with_base(tmp.path());

        // Act
        let result = load_all(&resolver, "never-created");

        // Assert
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_all_propagates_resolution_failure() {
        // Arrange
        struct UnavailableDirs;
        impl crate::dir::BaseDirSource for UnavailableDirs {
            fn base_dir(&self) -> Option<std::path::PathBuf> {
                None
            }
        }
        let resolver = DirResolver::with_source(Box::new(UnavailableDirs));

        // Act / Assert
        assert!(matches!(
            load_all(&resolver, APP),
            Err(ConfigError::NoPlatformConfigDir)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_all_fails_whole_batch_on_unreadable_file() {
        use std::os::unix::fs::{MetadataExt, PermissionsExt};

        // Arrange - one readable file, one with all permissions stripped
        let tmp = TempDir::new().expect("create temp dir");

        // Permission bits do not bind root; the scenario is untestable there.
        if fs::metadata(tmp.path()).expect("stat temp dir").uid() == 0 {
            return;
        }
        let resolver = seeded_resolver(
            &tmp,
            &[
                ("good.json", b"{\"a\":1}" as &[u8]),
                ("broken.json", b""),
            ],
        );
        let dir = resolver.resolve(APP).expect("resolve");
        let broken = dir.join("broken.json");
        fs::set_permissions(&broken, fs::Permissions::from_mode(0o000))
            .expect("chmod broken file");

        // Act
        let result = load_all(&resolver, APP);

        // Assert - no readable subset comes back, the whole call fails
        assert!(
            matches!(result, Err(ConfigError::Io { .. })),
            "one unreadable file must fail the whole batch"
        );

        // Cleanup so TempDir can remove the tree
        fs::set_permissions(&broken, fs::Permissions::from_mode(0o644)).expect("restore perms");
    }
}
