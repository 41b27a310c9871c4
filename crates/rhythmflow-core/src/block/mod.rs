//! Time blocks and the factory that builds them.
//!
//! A [`TimeBlock`] is one scheduled activity. Its points are computed by
//! [`crate::scoring::score`] when the block is built and are never edited by
//! hand afterwards; an edit rebuilds the block through the same factory.

mod category;

pub use category::{ActivityCategory, EnergyLevel};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ValidationError};
use crate::scoring;
use crate::time_grid;

/// User-supplied fields for creating or editing a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInput {
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub energy: EnergyLevel,
}

impl BlockInput {
    pub fn new(
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        title: impl Into<String>,
        category: ActivityCategory,
        energy: EnergyLevel,
    ) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
            title: title.into(),
            description: None,
            category,
            energy,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the input contract: a non-empty title and grid-aligned times.
    ///
    /// Start/end ordering and overlap with other blocks are not checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if !time_grid::is_slot_start(&self.start_time) {
            return Err(ValidationError::InvalidTime {
                field: "start_time",
                value: self.start_time.clone(),
            });
        }
        if !time_grid::is_slot_end(&self.end_time) {
            return Err(ValidationError::InvalidTime {
                field: "end_time",
                value: self.end_time.clone(),
            });
        }
        Ok(())
    }
}

/// One scheduled activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: ActivityCategory,
    pub energy: EnergyLevel,
    #[serde(default)]
    pub completed: bool,
    pub points: u32,
}

impl TimeBlock {
    /// Build a new, uncompleted block with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `input` breaks the input contract.
    pub fn create(input: BlockInput) -> Result<Self> {
        Self::rebuild(Uuid::new_v4().to_string(), false, input)
    }

    /// Build a block from `input` under an existing id and completion flag.
    ///
    /// Points are recomputed from the new fields.
    pub fn rebuild(id: String, completed: bool, input: BlockInput) -> Result<Self> {
        input.validate()?;
        let points = scoring::score(input.category, &input.start_time, input.energy)?;
        Ok(Self {
            id,
            start_time: input.start_time,
            end_time: input.end_time,
            title: input.title,
            description: input.description,
            category: input.category,
            energy: input.energy,
            completed,
            points,
        })
    }

    /// The editable fields of this block, e.g. to prefill an edit form.
    pub fn to_input(&self) -> BlockInput {
        BlockInput {
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            energy: self.energy,
        }
    }

    /// Whether `points` still equals the score of the block's own fields.
    pub fn points_are_consistent(&self) -> bool {
        scoring::score(self.category, &self.start_time, self.energy)
            .map(|expected| expected == self.points)
            .unwrap_or(false)
    }
}
