mod config;
pub mod snapshot;

pub use config::{Config, LogConfig, StorageConfig, TipsConfig};
pub use snapshot::{JsonFileStore, MemoryStore, SnapshotStore, SNAPSHOT_KEY};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/rhythmflow[-dev]/` based on RHYTHMFLOW_ENV.
///
/// Set RHYTHMFLOW_ENV=dev to use the development data directory, or
/// RHYTHMFLOW_DATA_DIR to point somewhere else entirely.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("RHYTHMFLOW_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("RHYTHMFLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("rhythmflow-dev")
            } else {
                base_dir.join("rhythmflow")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
