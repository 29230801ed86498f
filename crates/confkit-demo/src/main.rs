//! confkit demonstration entry point.
//!
//! Shows the intended division of labour: the library answers "where does
//! configuration live" and moves opaque bytes between buffer and disk,
//! while the application owns the format.  Here the application side is a
//! small settings struct serialized with `serde_json`.
//!
//! Run with `RUST_LOG=debug` to see the library's directory-creation and
//! bulk-load logging.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use confkit_core::{load_all, ConfigUnit, DirResolver};

/// Directory name under the platform configuration base.
const APP_NAME: &str = "confkit-demo";

/// The settings document this demo persists.  The library never sees
/// this type, only the bytes it serializes to.
#[derive(Debug, Serialize, Deserialize)]
struct DemoSettings {
    theme: String,
    refresh_secs: u64,
    favorites: Vec<String>,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            refresh_secs: 30,
            favorites: vec!["home".to_string(), "search".to_string()],
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let resolver = DirResolver::platform();
    let dir = resolver
        .ensure(APP_NAME)
        .context("ensuring the demo configuration directory")?;
    info!("configuration directory ready at {}", dir.display());

    // Serialize the settings and commit them through a unit.
    let settings = DemoSettings::default();
    let body = serde_json::to_vec_pretty(&settings).context("serializing settings")?;

    let mut unit = ConfigUnit::new(dir.join("settings.json"));
    unit.write(body);
    unit.save().context("saving settings.json")?;
    info!("saved settings to {}", unit.path().display());

    // Bulk-load the directory back and report everything found.
    let units = load_all(&resolver, APP_NAME).context("loading all configuration files")?;
    for unit in &units {
        let body = unit.read().context("reading a loaded unit")?;
        info!("found {} ({} bytes)", unit.path().display(), body.len());

        if unit.path().file_name().and_then(|n| n.to_str()) == Some("settings.json") {
            let restored: DemoSettings =
                serde_json::from_slice(body).context("parsing settings.json")?;
            info!("restored settings: {restored:?}");
        }
    }

    Ok(())
}
