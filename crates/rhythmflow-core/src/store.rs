//! Schedule store: the single owner of the day's schedule.
//!
//! Every mutation goes through [`ScheduleStore`], which keeps three
//! invariants intact before returning:
//!
//! - `blocks` is sorted by start time (stable, so ties keep insertion order)
//! - `total_points == Σ block.points`
//! - `completed_blocks == #{block | block.completed}`
//!
//! After each successful mutation the schedule is written through the
//! [`SnapshotStore`] port. Persisting is best-effort: a failed write is
//! logged and the in-memory schedule stays authoritative.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::block::{BlockInput, TimeBlock};
use crate::error::{CoreError, Result, ValidationError};
use crate::rollover::{apply_rollover, Rollover};
use crate::schedule::DaySchedule;
use crate::scoring;
use crate::storage::SnapshotStore;

/// Owns the current [`DaySchedule`] and its persistence port.
#[derive(Debug)]
pub struct ScheduleStore<S: SnapshotStore> {
    schedule: DaySchedule,
    storage: S,
}

impl<S: SnapshotStore> ScheduleStore<S> {
    /// Start a session for `today`.
    ///
    /// Loads the stored snapshot and passes it through day rollover. An
    /// unreadable snapshot is treated like a missing one. A kept snapshot
    /// whose totals, order or block points have drifted is repaired and
    /// written back; one that cannot be repaired is discarded.
    pub fn open(storage: S, today: NaiveDate) -> (Self, Rollover) {
        let snapshot = match storage.load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "failed to load schedule snapshot, starting empty");
                None
            }
        };

        let (mut schedule, mut outcome) = apply_rollover(snapshot, today);
        let mut repaired = false;
        if !schedule.is_consistent() {
            warn!(
                stored_points = schedule.total_points,
                stored_completed = schedule.completed_blocks,
                "schedule snapshot out of sync, recomputing"
            );
            if let Err(e) = schedule.repair() {
                warn!(error = %e, "schedule snapshot cannot be repaired, starting empty");
                schedule = DaySchedule::empty(today);
                outcome = Rollover::Fresh;
            }
            repaired = true;
        }

        let mut store = Self { schedule, storage };
        match outcome {
            Rollover::Reset { previous } => {
                info!(%previous, %today, "schedule rolled over to a new day");
            }
            Rollover::Fresh => {
                debug!(%today, "no stored schedule, starting fresh");
            }
            Rollover::Kept => {
                debug!(blocks = store.schedule.blocks.len(), "resumed today's schedule");
            }
        }
        if outcome.replaced() || repaired {
            store.persist();
        }
        (store, outcome)
    }

    /// Read-only view of the current schedule.
    pub fn schedule(&self) -> &DaySchedule {
        &self.schedule
    }

    pub fn block(&self, id: &str) -> Option<&TimeBlock> {
        self.schedule.block(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Build a block from `input` and add it.
    ///
    /// # Errors
    ///
    /// Returns a validation error, leaving the schedule untouched, if
    /// `input` breaks the input contract.
    pub fn create_block(&mut self, input: BlockInput) -> Result<&TimeBlock> {
        let block = TimeBlock::create(input)?;
        self.add_block(block)
    }

    /// Add a block, re-sort, and count its points.
    ///
    /// # Errors
    ///
    /// A validation error, leaving the schedule untouched, if the id is
    /// already scheduled, if `points` disagrees with the block's score, or
    /// if the day total would overflow.
    pub fn add_block(&mut self, block: TimeBlock) -> Result<&TimeBlock> {
        if self.schedule.position(&block.id).is_some() {
            return Err(ValidationError::DuplicateId(block.id).into());
        }
        let expected = scoring::score(block.category, &block.start_time, block.energy)?;
        if block.points != expected {
            return Err(ValidationError::PointsMismatch {
                id: block.id,
                points: block.points,
                expected,
            }
            .into());
        }
        let total_points = self
            .schedule
            .total_points
            .checked_add(block.points)
            .ok_or(ValidationError::PointsOverflow)?;

        let id = block.id.clone();
        self.schedule.total_points = total_points;
        if block.completed {
            self.schedule.completed_blocks += 1;
        }
        self.schedule.blocks.push(block);
        self.schedule.sort_blocks();
        debug!(%id, total_points = self.schedule.total_points, "block added");
        self.persist();
        Ok(self.find_after_mutation(&id))
    }

    /// Replace the fields of block `id`, keeping its id and completion flag.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] if no block has `id`; a validation error if
    /// `input` is malformed. Either way nothing changes.
    pub fn update_block(&mut self, id: &str, input: BlockInput) -> Result<&TimeBlock> {
        let index = self
            .schedule
            .position(id)
            .ok_or_else(|| CoreError::not_found(id))?;
        let old = &self.schedule.blocks[index];
        let rebuilt = TimeBlock::rebuild(old.id.clone(), old.completed, input)?;
        let old_points = old.points;
        let total_points = self
            .schedule
            .total_points
            .checked_sub(old_points)
            .and_then(|t| t.checked_add(rebuilt.points))
            .ok_or(ValidationError::PointsOverflow)?;

        self.schedule.total_points = total_points;
        self.schedule.blocks[index] = rebuilt;
        self.schedule.sort_blocks();
        debug!(%id, old_points, total_points = self.schedule.total_points, "block updated");
        self.persist();
        Ok(self.find_after_mutation(id))
    }

    /// Flip the completion flag of block `id`. Returns the new flag.
    ///
    /// # Errors
    ///
    /// [`CoreError::NotFound`] if no block has `id`.
    pub fn toggle_complete(&mut self, id: &str) -> Result<bool> {
        let block = self
            .schedule
            .blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::not_found(id))?;
        block.completed = !block.completed;
        let completed = block.completed;

        if completed {
            self.schedule.completed_blocks += 1;
        } else {
            self.schedule.completed_blocks -= 1;
        }
        debug!(%id, completed, completed_blocks = self.schedule.completed_blocks, "block toggled");
        self.persist();
        Ok(completed)
    }

    fn find_after_mutation(&self, id: &str) -> &TimeBlock {
        let index = self.schedule.position(id).unwrap_or_default();
        &self.schedule.blocks[index]
    }

    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.schedule) {
            warn!(error = %e, "failed to persist schedule snapshot, keeping in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{ActivityCategory, EnergyLevel};
    use crate::storage::MemoryStore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn store() -> ScheduleStore<MemoryStore> {
        ScheduleStore::open(MemoryStore::new(), today()).0
    }

    fn input(start: &str, category: ActivityCategory, energy: EnergyLevel) -> BlockInput {
        let end = crate::time_grid::slot_starting_at(start).unwrap().end_time;
        BlockInput::new(start, end, format!("{category} at {start}"), category, energy)
    }

    #[test]
    fn open_without_snapshot_persists_fresh_day() {
        let (store, outcome) = ScheduleStore::open(MemoryStore::new(), today());
        assert_eq!(outcome, Rollover::Fresh);
        assert_eq!(store.storage().save_count(), 1);
        assert_eq!(store.schedule().date, today());
    }

    #[test]
    fn add_sorts_by_start_time() {
        let mut store = store();
        let a = store
            .create_block(input("09:00", ActivityCategory::Work, EnergyLevel::Medium))
            .unwrap()
            .id
            .clone();
        let b = store
            .create_block(input("08:00", ActivityCategory::Rest, EnergyLevel::Low))
            .unwrap()
            .id
            .clone();
        let ids: Vec<_> = store.schedule().blocks.iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, vec![b, a]);
        // 12 + round(8 × 1.2 × 0.8 = 7.68)
        assert_eq!(store.schedule().total_points, 12 + 8);
        assert_eq!(store.schedule().completed_blocks, 0);
    }

    #[test]
    fn equal_start_times_keep_insertion_order() {
        let mut store = store();
        let first = store
            .create_block(input("10:00", ActivityCategory::Social, EnergyLevel::Low))
            .unwrap()
            .id
            .clone();
        let second = store
            .create_block(input("10:00", ActivityCategory::Chores, EnergyLevel::High))
            .unwrap()
            .id
            .clone();
        store
            .create_block(input("08:30", ActivityCategory::Rest, EnergyLevel::Low))
            .unwrap();
        assert_eq!(store.schedule().blocks[1].id, first);
        assert_eq!(store.schedule().blocks[2].id, second);
    }

    #[test]
    fn update_with_same_fields_keeps_totals() {
        let mut store = store();
        let block = store
            .create_block(input("14:00", ActivityCategory::Learning, EnergyLevel::High))
            .unwrap()
            .clone();
        let before = store.schedule().total_points;
        let updated = store.update_block(&block.id, block.to_input()).unwrap();
        assert_eq!(updated.points, block.points);
        assert_eq!(store.schedule().total_points, before);
    }

    #[test]
    fn update_rescores_and_preserves_identity() {
        let mut store = store();
        let id = store
            .create_block(input("08:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap()
            .id
            .clone();
        store.toggle_complete(&id).unwrap();

        let moved = input("21:00", ActivityCategory::Meditation, EnergyLevel::Low);
        let updated = store.update_block(&id, moved).unwrap();
        assert_eq!(updated.id, id);
        assert!(updated.completed);
        // 8 × 0.8 × 0.8 = 5.12
        assert_eq!(updated.points, 5);
        assert_eq!(store.schedule().total_points, 5);
        assert_eq!(store.schedule().completed_blocks, 1);
    }

    #[test]
    fn update_resorts() {
        let mut store = store();
        let early = store
            .create_block(input("08:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap()
            .id
            .clone();
        store
            .create_block(input("12:00", ActivityCategory::Nutrition, EnergyLevel::Medium))
            .unwrap();
        store
            .update_block(&early, input("15:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap();
        assert_eq!(store.schedule().blocks[1].id, early);
        assert!(store.schedule().is_sorted());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = store();
        let id = store
            .create_block(input("17:00", ActivityCategory::Exercise, EnergyLevel::Medium))
            .unwrap()
            .id
            .clone();
        assert!(store.toggle_complete(&id).unwrap());
        assert_eq!(store.schedule().completed_blocks, 1);
        assert!(!store.toggle_complete(&id).unwrap());
        assert_eq!(store.schedule().completed_blocks, 0);
        assert!(!store.block(&id).unwrap().completed);
    }

    #[test]
    fn unknown_id_is_not_found_and_changes_nothing() {
        let mut store = store();
        store
            .create_block(input("09:00", ActivityCategory::Work, EnergyLevel::Medium))
            .unwrap();
        let before = store.schedule().clone();
        let saves = store.storage().save_count();

        assert!(matches!(store.toggle_complete("nope"), Err(CoreError::NotFound { .. })));
        let err = store
            .update_block("nope", input("10:00", ActivityCategory::Rest, EnergyLevel::Low))
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { id } if id == "nope"));

        assert_eq!(store.schedule(), &before);
        assert_eq!(store.storage().save_count(), saves);
    }

    #[test]
    fn malformed_input_is_rejected_before_mutation() {
        let mut store = store();
        let id = store
            .create_block(input("09:00", ActivityCategory::Work, EnergyLevel::Medium))
            .unwrap()
            .id
            .clone();
        let before = store.schedule().clone();

        let bad = BlockInput::new("lunch", "13:00", "x", ActivityCategory::Nutrition, EnergyLevel::Low);
        assert!(matches!(store.create_block(bad.clone()), Err(CoreError::Validation(_))));
        assert!(matches!(store.update_block(&id, bad), Err(CoreError::Validation(_))));
        assert_eq!(store.schedule(), &before);
    }

    #[test]
    fn completed_block_added_directly_is_counted() {
        let mut store = store();
        let mut block = TimeBlock::create(input("11:00", ActivityCategory::Chores, EnergyLevel::Low)).unwrap();
        block.completed = true;
        store.add_block(block).unwrap();
        assert_eq!(store.schedule().completed_blocks, 1);
        assert!(store.schedule().is_consistent());
    }

    #[test]
    fn persist_failure_keeps_memory_state() {
        let mut storage = MemoryStore::new();
        storage.set_read_only(true);
        let (mut store, _) = ScheduleStore::open(storage, today());

        let id = store
            .create_block(input("09:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap()
            .id
            .clone();
        store.toggle_complete(&id).unwrap();

        assert_eq!(store.schedule().blocks.len(), 1);
        assert_eq!(store.schedule().completed_blocks, 1);
        assert!(store.storage().raw().is_none());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut store = store();
        let id = store
            .create_block(input("09:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap()
            .id
            .clone();
        store.toggle_complete(&id).unwrap();
        store
            .update_block(&id, input("10:00", ActivityCategory::Work, EnergyLevel::High))
            .unwrap();
        // fresh day + three mutations
        assert_eq!(store.storage().save_count(), 4);
        let saved = store.storage().load().unwrap().unwrap();
        assert_eq!(&saved, store.schedule());
    }

    #[test]
    fn open_repairs_drifted_snapshot() {
        let mut drifted = DaySchedule::empty(today());
        drifted.blocks.push(TimeBlock::create(input("10:00", ActivityCategory::Work, EnergyLevel::Low)).unwrap());
        drifted.blocks.push(TimeBlock::create(input("08:00", ActivityCategory::Rest, EnergyLevel::Low)).unwrap());
        drifted.total_points = 1000;
        drifted.completed_blocks = 3;

        let (store, outcome) = ScheduleStore::open(MemoryStore::with_snapshot(&drifted).unwrap(), today());
        assert_eq!(outcome, Rollover::Kept);
        assert!(store.schedule().is_consistent());
        assert_eq!(store.schedule().completed_blocks, 0);
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut store = store();
        let block = TimeBlock::create(input("09:00", ActivityCategory::Work, EnergyLevel::Medium)).unwrap();
        store.add_block(block.clone()).unwrap();
        let before = store.schedule().clone();

        let err = store.add_block(block.clone()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::DuplicateId(id)) if id == block.id));
        assert_eq!(store.schedule(), &before);
    }

    #[test]
    fn add_rejects_hand_edited_points() {
        let mut store = store();
        let mut block = TimeBlock::create(input("09:00", ActivityCategory::Work, EnergyLevel::Medium)).unwrap();
        block.points = 999;

        let err = store.add_block(block).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::PointsMismatch { points: 999, expected: 12, .. })
        ));
        assert!(store.schedule().is_empty());
        assert_eq!(store.schedule().total_points, 0);
    }

    #[test]
    fn open_rescores_hand_edited_points() {
        let mut tampered = DaySchedule::empty(today());
        let mut block = TimeBlock::create(input("09:00", ActivityCategory::Work, EnergyLevel::Medium)).unwrap();
        block.points = 500;
        tampered.blocks.push(block);
        tampered.total_points = 500;

        let (store, outcome) = ScheduleStore::open(MemoryStore::with_snapshot(&tampered).unwrap(), today());
        assert_eq!(outcome, Rollover::Kept);
        assert_eq!(store.schedule().blocks[0].points, 12);
        assert_eq!(store.schedule().total_points, 12);
        assert!(store.schedule().is_consistent());
    }

    #[test]
    fn open_persists_repaired_snapshot() {
        let mut drifted = DaySchedule::empty(today());
        drifted.blocks.push(TimeBlock::create(input("10:00", ActivityCategory::Work, EnergyLevel::Low)).unwrap());
        drifted.total_points = 77;

        let (store, _) = ScheduleStore::open(MemoryStore::with_snapshot(&drifted).unwrap(), today());
        assert_eq!(store.storage().save_count(), 1);
        let saved = store.storage().load().unwrap().unwrap();
        assert!(saved.is_consistent());
        assert_eq!(&saved, store.schedule());
    }

    #[test]
    fn open_does_not_rewrite_consistent_snapshot() {
        let mut day = DaySchedule::empty(today());
        day.blocks.push(TimeBlock::create(input("10:00", ActivityCategory::Work, EnergyLevel::Low)).unwrap());
        day.repair().unwrap();

        let (store, outcome) = ScheduleStore::open(MemoryStore::with_snapshot(&day).unwrap(), today());
        assert_eq!(outcome, Rollover::Kept);
        assert_eq!(store.storage().save_count(), 0);
    }

    #[test]
    fn open_survives_overflowing_points() {
        let mut tampered = DaySchedule::empty(today());
        for start in ["09:00", "10:00"] {
            let mut block = TimeBlock::create(input(start, ActivityCategory::Work, EnergyLevel::High)).unwrap();
            block.points = u32::MAX;
            tampered.blocks.push(block);
        }
        tampered.total_points = u32::MAX;

        let (store, _) = ScheduleStore::open(MemoryStore::with_snapshot(&tampered).unwrap(), today());
        assert!(store.schedule().is_consistent());
        assert_eq!(store.schedule().blocks.len(), 2);
    }

    #[test]
    fn open_treats_corrupt_snapshot_as_missing() {
        let mut storage = MemoryStore::new();
        storage.put_raw("{]");
        let (store, outcome) = ScheduleStore::open(storage, today());
        assert_eq!(outcome, Rollover::Fresh);
        assert!(store.schedule().is_empty());
    }
}
