//! View-only statistics derived from a day schedule.
//!
//! Nothing here is stored; every figure is recomputed by iterating blocks.

use serde::{Deserialize, Serialize};

use crate::block::{ActivityCategory, EnergyLevel};
use crate::schedule::DaySchedule;

/// Count and completions for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: ActivityCategory,
    pub count: u32,
    pub completed: u32,
}

/// Blocks per energy level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyDistribution {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl EnergyDistribution {
    pub fn total(&self) -> u32 {
        self.high + self.medium + self.low
    }

    pub fn get(&self, energy: EnergyLevel) -> u32 {
        match energy {
            EnergyLevel::High => self.high,
            EnergyLevel::Medium => self.medium,
            EnergyLevel::Low => self.low,
        }
    }
}

/// Day progress as shown in a summary panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub total_blocks: u32,
    pub completed_blocks: u32,
    pub total_points: u32,
    /// Completed share of blocks in whole percent
    pub completion_rate: u32,
    /// Categories present in the schedule, in category order
    pub by_category: Vec<CategoryStat>,
    pub by_energy: EnergyDistribution,
}

/// `count / total` in whole percent, rounded; 0 when `total` is 0.
pub fn percentage(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count * 200 + total) / (total * 2)
}

impl DaySummary {
    pub fn from_schedule(schedule: &DaySchedule) -> Self {
        let total_blocks = schedule.blocks.len() as u32;

        let by_category = ActivityCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let (count, completed) = schedule
                    .blocks
                    .iter()
                    .filter(|b| b.category == category)
                    .fold((0, 0), |(n, done), b| (n + 1, done + u32::from(b.completed)));
                (count > 0).then_some(CategoryStat {
                    category,
                    count,
                    completed,
                })
            })
            .collect();

        let mut by_energy = EnergyDistribution::default();
        for block in &schedule.blocks {
            match block.energy {
                EnergyLevel::High => by_energy.high += 1,
                EnergyLevel::Medium => by_energy.medium += 1,
                EnergyLevel::Low => by_energy.low += 1,
            }
        }

        Self {
            total_blocks,
            completed_blocks: schedule.completed_blocks,
            total_points: schedule.total_points,
            completion_rate: percentage(schedule.completed_blocks, total_blocks),
            by_category,
            by_energy,
        }
    }

    /// Share of blocks at `energy`, in whole percent.
    pub fn energy_share(&self, energy: EnergyLevel) -> u32 {
        percentage(self.by_energy.get(energy), self.by_energy.total())
    }
}
