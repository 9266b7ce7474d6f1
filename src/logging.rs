//! Log setup.
//!
//! The terminal belongs to the game, so logs only go to a file. With no log
//! path configured no subscriber is installed and every event is dropped.
//! `RUST_LOG` selects the filter (default `info`).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global file subscriber. Returns whether one was installed.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("failed to install log subscriber")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_installs_nothing() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let err = init(Some(Path::new("/nonexistent-dir/linesum/log.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to create log file"));
    }
}
