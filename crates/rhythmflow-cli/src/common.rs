//! Shared helpers for CLI commands.

use chrono::Local;
use rhythmflow_core::storage::data_dir;
use rhythmflow_core::{Config, JsonFileStore, Rollover, ScheduleStore};

/// Open today's schedule from the configured snapshot file.
pub fn open_store(
    config: &Config,
) -> Result<ScheduleStore<JsonFileStore>, Box<dyn std::error::Error>> {
    let path = config.snapshot_path(&data_dir()?);
    let today = Local::now().date_naive();
    tracing::debug!(path = %path.display(), %today, "opening schedule");
    let (store, outcome) = ScheduleStore::open(JsonFileStore::new(path), today);
    tracing::debug!(replaced = outcome.replaced(), "schedule opened");
    if let Rollover::Reset { previous } = outcome {
        eprintln!("Started a new day (previous schedule was for {previous})");
    }
    Ok(store)
}
