//! Closed activity and energy tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Kind of activity a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Work,
    Rest,
    Exercise,
    Leisure,
    Learning,
    Meditation,
    Social,
    Chores,
    Nutrition,
}

impl ActivityCategory {
    /// Every category, in declaration order.
    pub const ALL: [ActivityCategory; 9] = [
        ActivityCategory::Work,
        ActivityCategory::Rest,
        ActivityCategory::Exercise,
        ActivityCategory::Leisure,
        ActivityCategory::Learning,
        ActivityCategory::Meditation,
        ActivityCategory::Social,
        ActivityCategory::Chores,
        ActivityCategory::Nutrition,
    ];

    /// Points before time and energy multipliers.
    pub fn base_points(self) -> u32 {
        match self {
            ActivityCategory::Work => 10,
            ActivityCategory::Rest => 8,
            ActivityCategory::Exercise => 12,
            ActivityCategory::Leisure => 6,
            ActivityCategory::Learning => 10,
            ActivityCategory::Meditation => 8,
            ActivityCategory::Social => 7,
            ActivityCategory::Chores => 8,
            ActivityCategory::Nutrition => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCategory::Work => "work",
            ActivityCategory::Rest => "rest",
            ActivityCategory::Exercise => "exercise",
            ActivityCategory::Leisure => "leisure",
            ActivityCategory::Learning => "learning",
            ActivityCategory::Meditation => "meditation",
            ActivityCategory::Social => "social",
            ActivityCategory::Chores => "chores",
            ActivityCategory::Nutrition => "nutrition",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ActivityCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ActivityCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

/// Energy an activity demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl EnergyLevel {
    pub const ALL: [EnergyLevel; 3] = [EnergyLevel::High, EnergyLevel::Medium, EnergyLevel::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(EnergyLevel::High),
            "medium" => Ok(EnergyLevel::Medium),
            "low" => Ok(EnergyLevel::Low),
            _ => Err(ValidationError::UnknownEnergy(s.to_string())),
        }
    }
}
