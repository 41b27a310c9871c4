//! # Rhythmflow Core Library
//!
//! This library provides the core logic for Rhythmflow, a daily
//! time-blocking planner. Activities are laid out on a half-hour grid,
//! marked complete, and earn points based on category, time of day and the
//! energy they demand. Any front end (the bundled CLI included) is a thin
//! layer over this crate.
//!
//! ## Architecture
//!
//! - **Time grid**: the fixed 08:00 to midnight half-hour labels and slots
//! - **Scoring**: pure (category, start time, energy) → points
//! - **Blocks**: the factory that builds scored blocks with fresh ids
//! - **Store**: the owner of the day schedule; keeps order and totals in sync
//! - **Rollover**: resets a persisted schedule that is not from today
//! - **Storage**: JSON snapshot port and TOML configuration
//!
//! ## Key Components
//!
//! - [`ScheduleStore`]: add/update/toggle with invariant upkeep
//! - [`TimeBlock`]: one scored activity
//! - [`SnapshotStore`]: persistence port for the day snapshot
//! - [`Config`]: application configuration management

pub mod block;
pub mod error;
pub mod rollover;
pub mod schedule;
pub mod scoring;
pub mod storage;
pub mod store;
pub mod summary;
pub mod time_grid;
pub mod tips;

pub use block::{ActivityCategory, BlockInput, EnergyLevel, TimeBlock};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use rollover::{apply_rollover, Rollover};
pub use schedule::DaySchedule;
pub use scoring::{score, score_at_hour, ScoreBreakdown, TimeBand};
pub use storage::{Config, JsonFileStore, MemoryStore, SnapshotStore};
pub use store::ScheduleStore;
pub use summary::DaySummary;
pub use time_grid::{slots, time_labels, Slot};
