//! Integration tests for a day's schedule across sessions.

use chrono::NaiveDate;
use rhythmflow_core::{
    score, ActivityCategory, BlockInput, DaySchedule, DaySummary, EnergyLevel, JsonFileStore,
    Rollover, ScheduleStore, SnapshotStore,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, day).unwrap()
}

#[test]
fn test_reference_scores() {
    assert_eq!(score(ActivityCategory::Work, "08:00", EnergyLevel::High).unwrap(), 16);
    assert_eq!(score(ActivityCategory::Rest, "23:00", EnergyLevel::Low).unwrap(), 5);
}

#[test]
fn test_session_resumes_same_day_from_file() {
    let dir = tempfile::tempdir().unwrap();

    let (mut store, outcome) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(5));
    assert_eq!(outcome, Rollover::Fresh);

    let a = store
        .create_block(BlockInput::new("09:00", "09:30", "Standup", ActivityCategory::Work, EnergyLevel::Medium))
        .unwrap()
        .id
        .clone();
    let b = store
        .create_block(
            BlockInput::new("08:00", "08:30", "Stretch", ActivityCategory::Rest, EnergyLevel::Low)
                .with_description("Morning routine"),
        )
        .unwrap()
        .id
        .clone();
    store.toggle_complete(&a).unwrap();
    let expected = store.schedule().clone();
    drop(store);

    let (resumed, outcome) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(5));
    assert_eq!(outcome, Rollover::Kept);
    assert_eq!(resumed.schedule(), &expected);

    let order: Vec<_> = resumed.schedule().blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, vec![b.as_str(), a.as_str()]);
    assert_eq!(resumed.schedule().completed_blocks, 1);
}

#[test]
fn test_next_day_rolls_over_and_overwrites_snapshot() {
    let dir = tempfile::tempdir().unwrap();

    let (mut store, _) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(5));
    store
        .create_block(BlockInput::new("18:00", "19:00", "Dinner", ActivityCategory::Nutrition, EnergyLevel::Medium))
        .unwrap();
    drop(store);

    let (store, outcome) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(6));
    assert_eq!(outcome, Rollover::Reset { previous: date(5) });
    assert_eq!(store.schedule(), &DaySchedule::empty(date(6)));

    let on_disk = JsonFileStore::in_dir(dir.path()).load().unwrap().unwrap();
    assert_eq!(on_disk.date, date(6));
    assert!(on_disk.blocks.is_empty());
    assert_eq!(on_disk.total_points, 0);
}

#[test]
fn test_snapshot_file_is_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let (mut store, _) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(7));
    store
        .create_block(BlockInput::new("14:00", "14:30", "Read", ActivityCategory::Learning, EnergyLevel::High))
        .unwrap();

    let raw = std::fs::read_to_string(dir.path().join("daySchedule.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["date"], "2024-11-07");
    // 10 × 1.1 × 1.3 = 14.3
    assert_eq!(json["totalPoints"], 14);
    assert_eq!(json["completedBlocks"], 0);
    assert_eq!(json["blocks"][0]["title"], "Read");
    assert_eq!(json["blocks"][0]["energy"], "high");
}

#[test]
fn test_summary_reflects_store_state() {
    let dir = tempfile::tempdir().unwrap();
    let (mut store, _) = ScheduleStore::open(JsonFileStore::in_dir(dir.path()), date(8));
    let ids: Vec<String> = [
        ("08:00", "08:30", ActivityCategory::Exercise, EnergyLevel::High),
        ("12:00", "12:30", ActivityCategory::Nutrition, EnergyLevel::Medium),
        ("20:00", "20:30", ActivityCategory::Leisure, EnergyLevel::Low),
        ("21:00", "21:30", ActivityCategory::Meditation, EnergyLevel::Low),
    ]
    .into_iter()
    .map(|(start, end, category, energy)| {
        store
            .create_block(BlockInput::new(start, end, "x", category, energy))
            .unwrap()
            .id
            .clone()
    })
    .collect();
    store.toggle_complete(&ids[0]).unwrap();

    let summary = DaySummary::from_schedule(store.schedule());
    assert_eq!(summary.total_blocks, 4);
    assert_eq!(summary.completion_rate, 25);
    assert_eq!(summary.by_energy.low, 2);
    assert_eq!(summary.by_category.len(), 4);
    assert_eq!(Some(summary.total_points), store.schedule().sum_points());
}
