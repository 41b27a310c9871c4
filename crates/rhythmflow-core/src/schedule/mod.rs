//! The day schedule aggregate.
//!
//! A [`DaySchedule`] holds one calendar day of blocks together with two
//! running totals. The totals are maintained by
//! [`ScheduleStore`](crate::store::ScheduleStore); the helpers here only read
//! or recompute them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tracing::warn;

use crate::block::TimeBlock;
use crate::error::ValidationError;
use crate::scoring;

/// One day of planned blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Calendar day this schedule belongs to
    pub date: NaiveDate,
    /// Blocks sorted by start time
    #[serde(default)]
    pub blocks: Vec<TimeBlock>,
    /// Sum of points over all blocks, completed or not
    #[serde(default)]
    pub total_points: u32,
    /// Number of completed blocks
    #[serde(default)]
    pub completed_blocks: u32,
}

impl DaySchedule {
    /// An empty schedule for `date`.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            blocks: Vec::new(),
            total_points: 0,
            completed_blocks: 0,
        }
    }

    pub fn block(&self, id: &str) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// The block occupying exactly `start_time`..`end_time`, if any.
    pub fn block_in_slot(&self, start_time: &str, end_time: &str) -> Option<&TimeBlock> {
        self.blocks
            .iter()
            .find(|b| b.start_time == start_time && b.end_time == end_time)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Points summed from the blocks themselves, `None` on overflow.
    pub fn sum_points(&self) -> Option<u32> {
        self.blocks
            .iter()
            .try_fold(0u32, |acc, b| acc.checked_add(b.points))
    }

    /// Completed blocks counted from the blocks themselves.
    pub fn count_completed(&self) -> u32 {
        self.blocks.iter().filter(|b| b.completed).count() as u32
    }

    pub fn is_sorted(&self) -> bool {
        self.blocks
            .windows(2)
            .all(|w| w[0].start_time <= w[1].start_time)
    }

    /// Whether the stored totals, order and per-block points agree with
    /// the blocks.
    pub fn is_consistent(&self) -> bool {
        self.sum_points() == Some(self.total_points)
            && self.completed_blocks == self.count_completed()
            && self.is_sorted()
            && self.blocks.iter().all(TimeBlock::points_are_consistent)
    }

    /// Stable sort by start time; equal starts keep insertion order.
    pub(crate) fn sort_blocks(&mut self) {
        self.blocks.sort_by(|a, b| a.start_time.cmp(&b.start_time));
    }

    /// Rescore every block, re-sort, and recompute both totals.
    ///
    /// Blocks whose start time cannot be scored are dropped.
    pub(crate) fn repair(&mut self) -> Result<(), ValidationError> {
        self.blocks.retain_mut(|block| {
            match scoring::score(block.category, &block.start_time, block.energy) {
                Ok(points) => {
                    block.points = points;
                    true
                }
                Err(e) => {
                    warn!(id = %block.id, error = %e, "dropping unscorable block");
                    false
                }
            }
        });
        self.sort_blocks();
        self.total_points = self.sum_points().ok_or(ValidationError::PointsOverflow)?;
        self.completed_blocks = self.count_completed();
        Ok(())
    }
}
