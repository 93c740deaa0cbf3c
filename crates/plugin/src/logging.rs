//! Tracing subscriber setup
//!
//! Logs go to `DynamicCrosshairFramework.log` next to the plugin when the file
//! can be created, and to stderr otherwise. `RUST_LOG` overrides the level
//! chosen from the config.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use dcf_core::config::log_path;
use dcf_core::CrosshairConfig;

/// Initialize the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(config: &CrosshairConfig) {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = log_path().ok().and_then(|path| open_log_file(&path));
    let to_file = log_file.is_some();
    let writer = match log_file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::stderr),
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(!to_file)
        .with_thread_ids(true)
        .try_init()
        .is_ok();

    if installed && !to_file {
        tracing::warn!("Log file unavailable, logging to stderr");
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    File::create(path).ok()
}
