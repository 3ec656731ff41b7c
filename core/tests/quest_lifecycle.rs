//! Quest store behaviour across reloads and day boundaries.

use chrono::NaiveDate;
use morph_core::{FileStore, FixedClock, KeyValueStore, MemoryStore, QuestStore};
use morph_types::QUEST_STORAGE_KEY;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn stale_record_reads_empty_and_stays_untouched() {
    let yesterday = r#"{"date":"2026-10-18","completed":["daily-checkin","bridger"]}"#;
    let storage = MemoryStore::with_entry(QUEST_STORAGE_KEY, yesterday);
    let clock = FixedClock::new(day(19));
    let store = QuestStore::with_clock(&storage, &clock);

    let state = store.load();
    assert!(state.is_empty());
    assert_eq!(state.date_key(), "2026-10-19");
    assert_eq!(store.earned_xp(&state), 0);

    // Loading again does not rewrite anything
    let _ = store.load();
    assert_eq!(
        storage.get(QUEST_STORAGE_KEY).unwrap().as_deref(),
        Some(yesterday)
    );

    // The next save replaces it with today's record
    store.toggle_and_save(&state, "volume-booster");
    let raw = storage.get(QUEST_STORAGE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"date":"2026-10-19","completed":["volume-booster"]}"#);
}

#[test]
fn progress_resets_after_midnight_reload() {
    let storage = MemoryStore::new();
    let clock = FixedClock::new(day(19));
    let store = QuestStore::with_clock(&storage, &clock);

    let mut state = store.load();
    for id in ["daily-checkin", "bridger", "volume-booster", "social-warrior"] {
        state = store.toggle_and_save(&state, id);
    }
    assert_eq!(store.progress_fraction(&state), 1.0);
    assert_eq!(store.load(), state);

    // The session keeps its state until the page loads again
    clock.advance_days(1);
    assert_eq!(store.earned_xp(&state), 110);

    let fresh = store.load();
    assert!(fresh.is_empty());
    assert_eq!(fresh.date_key(), "2026-10-20");
    assert_eq!(store.progress_fraction(&fresh), 0.0);
}

#[test]
fn file_store_survives_new_store_instance() {
    let dir = tempfile::tempdir().unwrap();
    let clock = FixedClock::new(day(19));

    let state = {
        let store = QuestStore::with_clock(FileStore::new(dir.path()), &clock);
        let state = store.toggle_and_save(&store.load(), "bridger");
        store.toggle_and_save(&state, "social-warrior")
    };

    let reopened = QuestStore::with_clock(FileStore::new(dir.path()), &clock);
    let loaded = reopened.load();
    assert_eq!(loaded, state);
    assert_eq!(reopened.earned_xp(&loaded), 70);
    assert!(FileStore::new(dir.path()).path_for(QUEST_STORAGE_KEY).exists());
}

#[test]
fn corrupt_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileStore::new(dir.path());
    files.set(QUEST_STORAGE_KEY, "{\"date\": \"2026-10-19\", \"compl").unwrap();

    let store = QuestStore::with_clock(files, FixedClock::new(day(19)));
    assert!(store.load().is_empty());
}
