//! File logging.
//!
//! The TUI owns the terminal, so log output goes to `suvidha.log` in the data
//! directory. The filter comes from [`KioskConfig::log_filter`].

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::KioskConfig;

/// Install the global subscriber. Returns the log file path.
///
/// An invalid filter falls back to `info`. Fails if the log file cannot be
/// opened or a subscriber is already installed.
pub fn init_logging(config: &KioskConfig) -> io::Result<PathBuf> {
    fs::create_dir_all(&config.data_dir)?;
    let path = config.log_file();
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "SUVIDHA kiosk starting");
    Ok(path)
}
