//! Day rollover for persisted schedules.
//!
//! A schedule only lives for its calendar day. On session start the stored
//! snapshot is kept if it is dated today and replaced by an empty schedule
//! otherwise. Only the date is compared, never the time of day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::DaySchedule;

/// What [`apply_rollover`] did with the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rollover {
    /// Snapshot belongs to today and was kept as-is
    Kept,
    /// Snapshot was from another day and has been replaced
    Reset { previous: NaiveDate },
    /// There was no snapshot
    Fresh,
}

impl Rollover {
    /// Whether the resulting schedule differs from what was stored.
    pub fn replaced(&self) -> bool {
        !matches!(self, Rollover::Kept)
    }
}

/// Keep `snapshot` if it is dated `today`, otherwise start an empty day.
pub fn apply_rollover(snapshot: Option<DaySchedule>, today: NaiveDate) -> (DaySchedule, Rollover) {
    match snapshot {
        Some(schedule) if schedule.date == today => (schedule, Rollover::Kept),
        Some(schedule) => (
            DaySchedule::empty(today),
            Rollover::Reset {
                previous: schedule.date,
            },
        ),
        None => (DaySchedule::empty(today), Rollover::Fresh),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{ActivityCategory, BlockInput, EnergyLevel, TimeBlock};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn populated(on: NaiveDate) -> DaySchedule {
        let block = TimeBlock::create(BlockInput::new(
            "08:00",
            "08:30",
            "Run",
            ActivityCategory::Exercise,
            EnergyLevel::High,
        ))
        .unwrap();
        DaySchedule {
            date: on,
            total_points: block.points,
            completed_blocks: 0,
            blocks: vec![block],
        }
    }

    #[test]
    fn same_day_snapshot_is_kept() {
        let snapshot = populated(date(10));
        let (schedule, outcome) = apply_rollover(Some(snapshot.clone()), date(10));
        assert_eq!(outcome, Rollover::Kept);
        assert!(!outcome.replaced());
        assert_eq!(schedule, snapshot);
    }

    #[test]
    fn yesterday_snapshot_is_reset() {
        let (schedule, outcome) = apply_rollover(Some(populated(date(9))), date(10));
        assert_eq!(outcome, Rollover::Reset { previous: date(9) });
        assert_eq!(schedule.date, date(10));
        assert!(schedule.blocks.is_empty());
        assert_eq!(schedule.total_points, 0);
        assert_eq!(schedule.completed_blocks, 0);
    }

    #[test]
    fn future_snapshot_is_also_reset() {
        let (schedule, outcome) = apply_rollover(Some(populated(date(11))), date(10));
        assert!(outcome.replaced());
        assert_eq!(schedule, DaySchedule::empty(date(10)));
    }

    #[test]
    fn missing_snapshot_starts_fresh() {
        let (schedule, outcome) = apply_rollover(None, date(10));
        assert_eq!(outcome, Rollover::Fresh);
        assert_eq!(schedule, DaySchedule::empty(date(10)));
    }
}
