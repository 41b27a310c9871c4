//! Half-hour time grid for the planning day.
//!
//! The day runs from 08:00 to midnight. Midnight is written "00:00" and is
//! the last label; it closes the final slot but begins none.

use serde::{Deserialize, Serialize};

/// First hour on the grid.
pub const DAY_START_HOUR: u32 = 8;
/// Hour at which the grid ends (midnight).
pub const DAY_END_HOUR: u32 = 24;
/// Width of one slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// One 30-minute cell between two consecutive grid labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub start_time: String,
    pub end_time: String,
}

fn format_minutes(total: u32) -> String {
    let hour = (total / 60) % 24;
    format!("{:02}:{:02}", hour, total % 60)
}

/// Ordered labels from 08:00 to 00:00 inclusive, stepped by 30 minutes.
///
/// Returns the same 33 labels on every call.
pub fn time_labels() -> Vec<String> {
    (DAY_START_HOUR * 60..=DAY_END_HOUR * 60)
        .step_by(SLOT_MINUTES as usize)
        .map(format_minutes)
        .collect()
}

/// Consecutive label pairs. The trailing 00:00 starts no slot.
pub fn slots() -> Vec<Slot> {
    let labels = time_labels();
    labels
        .windows(2)
        .map(|pair| Slot {
            start_time: pair[0].clone(),
            end_time: pair[1].clone(),
        })
        .collect()
}

/// Strict "HH:MM" parse: two digits, a colon, two digits, in 24-hour range.
pub fn parse_label(label: &str) -> Option<(u32, u32)> {
    let (h, m) = label.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = h.parse().ok()?;
    let minute: u32 = m.parse().ok()?;
    (hour < 24 && minute < 60).then_some((hour, minute))
}

/// Minutes since midnight, treating "00:00" as the end of the day (24:00).
fn grid_minutes(label: &str) -> Option<u32> {
    let (hour, minute) = parse_label(label)?;
    if minute % SLOT_MINUTES != 0 {
        return None;
    }
    let total = hour * 60 + minute;
    let total = if total == 0 { DAY_END_HOUR * 60 } else { total };
    (DAY_START_HOUR * 60..=DAY_END_HOUR * 60)
        .contains(&total)
        .then_some(total)
}

/// Whether a slot can begin at `label` (08:00 through 23:30).
pub fn is_slot_start(label: &str) -> bool {
    grid_minutes(label).is_some_and(|m| m < DAY_END_HOUR * 60)
}

/// Whether a slot can end at `label` (08:30 through 00:00).
pub fn is_slot_end(label: &str) -> bool {
    grid_minutes(label).is_some_and(|m| m > DAY_START_HOUR * 60)
}

/// The slot that begins at `label`, if any.
pub fn slot_starting_at(label: &str) -> Option<Slot> {
    let start = grid_minutes(label)?;
    if start >= DAY_END_HOUR * 60 {
        return None;
    }
    Some(Slot {
        start_time: format_minutes(start),
        end_time: format_minutes(start + SLOT_MINUTES),
    })
}
