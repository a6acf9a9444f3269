//! Log setup.
//!
//! The terminal belongs to the game screen, so log lines go to
//! `~/.flappy/flappy.log` instead of stdout/stderr.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing::{info, warn, Level};

/// Install the global subscriber. `verbose` lowers the threshold to DEBUG.
/// If the log file cannot be opened, log output is discarded.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    let file = data_path(LOG_FILE)
        .and_then(|path| OpenOptions::new().create(true).append(true).open(path));

    let installed = match file {
        Ok(file) => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::sink)
            .try_init(),
    };

    match installed {
        Ok(()) => info!("logger started"),
        // Already initialised; the existing subscriber keeps receiving events.
        Err(e) => warn!(error = %e, "global subscriber already set, keeping it"),
    }
}
