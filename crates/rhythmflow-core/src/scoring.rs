//! Block point scoring.
//!
//! Points reward matching an activity to the time of day and to the energy
//! it demands:
//!
//! ```text
//! points = round(base(category) × time_multiplier(hour) × energy_multiplier(energy))
//! ```
//!
//! ## Time bands
//!
//! | Hours        | Band        | Multiplier |
//! |--------------|-------------|------------|
//! | [8, 11)      | Morning     | ×1.2       |
//! | [11, 14)     | Midday      | ×0.9       |
//! | [14, 17)     | Afternoon   | ×1.1       |
//! | [17, 20)     | Evening     | ×1.0       |
//! | anything else| Night       | ×0.8       |
//!
//! Multipliers are stored in tenths so the product is exact in hundredths.
//! Rounding is half away from zero, applied once on the final product.

use serde::{Deserialize, Serialize};

use crate::block::{ActivityCategory, EnergyLevel};
use crate::error::{Result, ValidationError};

/// Time-of-day band used by the time multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBand {
    /// High-focus morning
    Morning,
    /// Post-peak dip
    Midday,
    /// Afternoon creative peak
    Afternoon,
    /// Balanced evening
    Evening,
    /// Winding down, and any hour outside the named bands
    Night,
}

impl TimeBand {
    /// Band containing `hour`. Edges are half-open.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            8..=10 => TimeBand::Morning,
            11..=13 => TimeBand::Midday,
            14..=16 => TimeBand::Afternoon,
            17..=19 => TimeBand::Evening,
            _ => TimeBand::Night,
        }
    }

    /// Multiplier in tenths (12 = ×1.2).
    pub fn multiplier_tenths(self) -> u32 {
        match self {
            TimeBand::Morning => 12,
            TimeBand::Midday => 9,
            TimeBand::Afternoon => 11,
            TimeBand::Evening => 10,
            TimeBand::Night => 8,
        }
    }

    pub fn multiplier(self) -> f64 {
        f64::from(self.multiplier_tenths()) / 10.0
    }
}

impl EnergyLevel {
    /// Multiplier in tenths (13 = ×1.3).
    pub fn multiplier_tenths(self) -> u32 {
        match self {
            EnergyLevel::High => 13,
            EnergyLevel::Medium => 10,
            EnergyLevel::Low => 8,
        }
    }

    pub fn multiplier(self) -> f64 {
        f64::from(self.multiplier_tenths()) / 10.0
    }
}

/// Round a non-negative value given in hundredths to the nearest integer,
/// ties away from zero.
pub fn round_hundredths(hundredths: u32) -> u32 {
    (hundredths + 50) / 100
}

/// Extract the hour from an "HH:MM" start time.
///
/// Only the hour component is read, so "9:00" and "09:00" both give 9.
pub fn parse_hour(start_time: &str) -> Result<u32, ValidationError> {
    let malformed = || ValidationError::InvalidTime {
        field: "start_time",
        value: start_time.to_string(),
    };
    let hour = start_time.split(':').next().unwrap_or_default();
    if hour.is_empty() || hour.len() > 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    hour.parse().map_err(|_| malformed())
}

/// Points for a block at `hour`. Infallible core of [`score`].
pub fn score_at_hour(category: ActivityCategory, hour: u32, energy: EnergyLevel) -> u32 {
    let hundredths = category.base_points()
        * TimeBand::from_hour(hour).multiplier_tenths()
        * energy.multiplier_tenths();
    round_hundredths(hundredths)
}

/// Points for a block of `category` starting at `start_time` with `energy`.
///
/// # Errors
///
/// Fails with [`ValidationError::InvalidTime`] when the hour component is
/// missing or non-numeric.
pub fn score(category: ActivityCategory, start_time: &str, energy: EnergyLevel) -> Result<u32> {
    let hour = parse_hour(start_time)?;
    Ok(score_at_hour(category, hour, energy))
}

/// Explainable view of a score, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub category: ActivityCategory,
    pub base_points: u32,
    pub hour: u32,
    pub band: TimeBand,
    pub time_multiplier: f64,
    pub energy: EnergyLevel,
    pub energy_multiplier: f64,
    pub points: u32,
}

impl ScoreBreakdown {
    /// Score `start_time` and keep every intermediate factor.
    pub fn explain(
        category: ActivityCategory,
        start_time: &str,
        energy: EnergyLevel,
    ) -> Result<Self> {
        let hour = parse_hour(start_time)?;
        let band = TimeBand::from_hour(hour);
        Ok(Self {
            category,
            base_points: category.base_points(),
            hour,
            band,
            time_multiplier: band.multiplier(),
            energy,
            energy_multiplier: energy.multiplier(),
            points: score_at_hour(category, hour, energy),
        })
    }
}
