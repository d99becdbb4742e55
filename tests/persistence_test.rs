//! Save directory round-trips through the session and profile APIs.

use std::fs;
use std::path::PathBuf;

use castaway::config::{Settings, SETTINGS_FILE};
use castaway::core::Session;
use castaway::fishing::EncounterState;
use castaway::profile::{
    Profile, ACHIEVEMENTS_FILE, CHARACTER_FILE, COLLECTION_FILE, DAILY_REWARDS_FILE,
    PROGRESSION_FILE, STATISTICS_FILE,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};

const ALL_FILES: [&str; 6] = [
    COLLECTION_FILE,
    STATISTICS_FILE,
    ACHIEVEMENTS_FILE,
    PROGRESSION_FILE,
    CHARACTER_FILE,
    DAILY_REWARDS_FILE,
];

// =============================================================================
// Helper Functions
// =============================================================================

fn create_test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("castaway_it_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn start_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn fish_for(session: &mut Session, ticks: u32) {
    let mut now = start_time();
    for _ in 0..ticks {
        if matches!(
            session.encounter().state(),
            EncounterState::Idle | EncounterState::Bite
        ) {
            session.request_cast();
        }
        now += Duration::milliseconds(16);
        session.tick(now);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[test]
fn test_session_load_writes_every_record() {
    let dir = create_test_dir("writes");
    let _session = Session::load(&dir, start_time(), Some(1)).unwrap();
    for file in ALL_FILES {
        assert!(dir.join(file).exists(), "{file} not written");
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_progress_survives_reload() {
    let dir = create_test_dir("reload");
    let mut session = Session::load(&dir, start_time(), Some(12345)).unwrap();
    fish_for(&mut session, 60 * 60 * 3);
    let finished = session.finish();
    assert!(finished.statistics.total_catches > 0);

    let reloaded = Profile::load(&dir);
    assert_eq!(reloaded.collection, finished.collection);
    assert_eq!(reloaded.progression.gold, finished.progression.gold);
    assert_eq!(reloaded.progression.level, finished.progression.level);
    assert_eq!(
        reloaded.statistics.total_catches,
        finished.statistics.total_catches
    );
    assert_eq!(
        reloaded.achievements.unlocked_count(),
        finished.achievements.unlocked_count()
    );
    assert_eq!(reloaded.daily, finished.daily);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_record_falls_back_alone() {
    let dir = create_test_dir("corrupt");
    let mut profile = Profile::new();
    profile.progression.gold = 321;
    profile.statistics.total_casts = 9;
    profile.save(&dir).unwrap();

    fs::write(dir.join(STATISTICS_FILE), "{ not json").unwrap();
    let loaded = Profile::load(&dir);
    assert_eq!(loaded.progression.gold, 321);
    assert_eq!(loaded.statistics.total_casts, 0);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_directory_gives_fresh_profile() {
    let dir = create_test_dir("missing");
    let profile = Profile::load(&dir);
    assert_eq!(profile.progression.level, 1);
    assert_eq!(profile.statistics.total_catches, 0);
    assert!(!profile.collection.caught_fish.is_empty());
    assert!(!dir.exists());
}

#[test]
fn test_settings_file_is_read() {
    let dir = create_test_dir("settings");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join(SETTINGS_FILE),
        r#"{"seed": 42, "persist": false, "ticks": 600}"#,
    )
    .unwrap();

    let settings = Settings::load(&dir);
    assert_eq!(settings.seed, Some(42));
    assert!(!settings.persist);
    assert_eq!(settings.ticks, 600);
    assert_eq!(settings.reaction_ticks, Settings::default().reaction_ticks);
    let _ = fs::remove_dir_all(&dir);
}
