//! The session: owns every subsystem for one play session.
//!
//! Construction validates the static catalogs and aborts on a malformed one.
//! Every mutating action is followed by a synchronous save when a save
//! directory is attached; save failures are logged and never roll back state.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::constants::{seconds_to_ticks, LEVEL_UP_NOTIFICATION_SECONDS};
use super::tick::{game_tick, CatchReport, TickEvent, TickResult};
use crate::achievements::{validate_achievements, Achievements, ALL_ACHIEVEMENTS};
use crate::character::CharacterStats;
use crate::collection::Collection;
use crate::environment::EnvironmentState;
use crate::error::{CatalogError, PurchaseError};
use crate::fishing::catalog::{validate_species, validate_weights, RARITY_WEIGHTS, SPECIES};
use crate::fishing::encounter::{CastOutcome, FishingEncounter};
use crate::fishing::resolve::MultiplierBreakdown;
use crate::profile::Profile;
use crate::progression::{validate_rods, Progression, ROD_CATALOG};
use crate::rewards::{claim_daily_reward, DailyClaim};
use crate::statistics::Statistics;

/// Checks every static catalog. Called once before a session starts.
pub fn validate_catalogs() -> Result<(), CatalogError> {
    validate_weights(&RARITY_WEIGHTS)?;
    validate_species(SPECIES)?;
    validate_rods(ROD_CATALOG)?;
    validate_achievements(ALL_ACHIEVEMENTS)?;
    Ok(())
}

pub struct Session {
    profile: Profile,
    environment: EnvironmentState,
    encounter: FishingEncounter,
    rng: StdRng,
    save_dir: Option<PathBuf>,
    latest_catch: Option<CatchReport>,
    level_up_ticks: u32,
    started_at: NaiveDateTime,
    now: NaiveDateTime,
    ticks: u64,
}

impl Session {
    /// Starts a session over `profile`. Registers today's login.
    pub fn new(
        mut profile: Profile,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<Self, CatalogError> {
        validate_catalogs()?;

        profile.normalize();
        profile.statistics.begin_session();
        profile.statistics.check_daily_reset(now.date());
        profile.daily.check_daily_login(now.date());

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            level = profile.progression.level,
            rod = %profile.progression.equipped_rod,
            seeded = seed.is_some(),
            "session started"
        );

        Ok(Self {
            profile,
            environment: EnvironmentState::new(now),
            encounter: FishingEncounter::default(),
            rng,
            save_dir: None,
            latest_catch: None,
            level_up_ticks: 0,
            started_at: now,
            now,
            ticks: 0,
        })
    }

    /// Loads the profile from `dir` and saves back into it.
    pub fn load(dir: &Path, now: NaiveDateTime, seed: Option<u64>) -> Result<Self, CatalogError> {
        let session = Self::new(Profile::load(dir), now, seed)?.with_save_dir(dir.to_path_buf());
        session.persist();
        Ok(session)
    }

    pub fn with_save_dir(mut self, dir: PathBuf) -> Self {
        self.save_dir = Some(dir);
        self
    }

    // =========================================================================
    // Player intents
    // =========================================================================

    /// The single cast/reel input.
    pub fn request_cast(&mut self) -> CastOutcome {
        let outcome = self.encounter.request_cast();
        if outcome == CastOutcome::Started {
            self.profile.statistics.record_cast();
            self.persist();
        }
        outcome
    }

    pub fn move_player(&mut self, dx: f32) -> bool {
        self.encounter.move_player(dx)
    }

    /// Advances the session by one tick at wall-clock time `now`.
    pub fn tick(&mut self, now: NaiveDateTime) -> TickResult {
        self.now = now;
        self.ticks += 1;
        self.level_up_ticks = self.level_up_ticks.saturating_sub(1);

        let result = game_tick(
            &mut self.profile,
            &mut self.environment,
            &mut self.encounter,
            now,
            &mut self.rng,
        );

        if result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::LevelUp { .. }))
        {
            self.level_up_ticks = seconds_to_ticks(LEVEL_UP_NOTIFICATION_SECONDS);
        }
        if let Some(report) = &result.catch {
            self.latest_catch = Some(report.clone());
        }
        if result.profile_changed {
            self.persist();
        }
        result
    }

    pub fn claim_daily(&mut self) -> Option<DailyClaim> {
        let claim = claim_daily_reward(&mut self.profile)?;
        if claim.levels_gained > 0 {
            self.level_up_ticks = seconds_to_ticks(LEVEL_UP_NOTIFICATION_SECONDS);
        }
        self.persist();
        Some(claim)
    }

    pub fn purchase_rod(&mut self, id: &str) -> Result<u64, PurchaseError> {
        let cost = self.profile.progression.purchase_rod(id)?;
        self.persist();
        Ok(cost)
    }

    pub fn equip_rod(&mut self, id: &str) -> bool {
        let equipped = self.profile.progression.equip_rod(id);
        if equipped {
            self.persist();
        }
        equipped
    }

    /// Ends the session, folding its length into the playtime totals.
    pub fn finish(mut self) -> Profile {
        let seconds = (self.now - self.started_at).num_milliseconds() as f64 / 1000.0;
        self.profile.statistics.end_session(seconds);
        self.persist();
        tracing::info!(
            ticks = self.ticks,
            seconds,
            catches = self.profile.statistics.total_catches,
            "session finished"
        );
        self.profile
    }

    /// Saves the profile if a save directory is attached.
    pub fn persist(&self) {
        if let Some(dir) = &self.save_dir {
            self.profile.save_or_warn(dir);
        }
    }

    // =========================================================================
    // Read-only views
    // =========================================================================

    pub fn encounter(&self) -> &FishingEncounter {
        &self.encounter
    }

    pub fn environment(&self) -> &EnvironmentState {
        &self.environment
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn collection(&self) -> &Collection {
        &self.profile.collection
    }

    pub fn statistics(&self) -> &Statistics {
        &self.profile.statistics
    }

    pub fn achievements(&self) -> &Achievements {
        &self.profile.achievements
    }

    pub fn progression(&self) -> &Progression {
        &self.profile.progression
    }

    pub fn character(&self) -> &CharacterStats {
        &self.profile.character
    }

    /// The most recent catch with its multiplier breakdown.
    pub fn latest_catch(&self) -> Option<&CatchReport> {
        self.latest_catch.as_ref()
    }

    /// Multipliers that would apply to a catch right now.
    pub fn current_multipliers(&self) -> MultiplierBreakdown {
        MultiplierBreakdown::capture(
            &self.environment,
            &self.profile.character,
            self.profile.progression.equipped(),
        )
    }

    pub fn level_up_active(&self) -> bool {
        self.level_up_ticks > 0
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn save_dir(&self) -> Option<&Path> {
        self.save_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::encounter::EncounterState;
    use chrono::{Duration, NaiveDate};

    fn test_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn create_test_session() -> Session {
        Session::new(Profile::new(), test_now(), Some(12345)).unwrap()
    }

    #[test]
    fn test_catalogs_are_valid() {
        assert!(validate_catalogs().is_ok());
    }

    #[test]
    fn test_new_session_registers_login() {
        let session = create_test_session();
        assert_eq!(session.profile().daily.current_streak, 1);
        assert_eq!(session.statistics().total_sessions, 1);
        assert!(session.profile().daily.has_unclaimed_reward());
    }

    #[test]
    fn test_cast_counts_only_when_started() {
        let mut session = create_test_session();
        assert_eq!(session.request_cast(), CastOutcome::Started);
        assert_eq!(session.request_cast(), CastOutcome::Ignored);
        assert_eq!(session.statistics().total_casts, 1);
    }

    #[test]
    fn test_catch_sets_latest_catch() {
        let mut session = create_test_session();
        session.request_cast();
        let mut now = test_now();
        while session.encounter().state() != EncounterState::Bite {
            now += Duration::milliseconds(16);
            session.tick(now);
        }
        session.request_cast();
        session.tick(now);

        let report = session.latest_catch().unwrap();
        assert_eq!(session.statistics().total_catches, 1);
        assert_eq!(
            report.outcome.fish.value,
            session.statistics().total_gold_earned
        );
    }

    #[test]
    fn test_purchase_and_equip() {
        let mut session = create_test_session();
        assert_eq!(
            session.purchase_rod("training"),
            Err(PurchaseError::LevelTooLow {
                required: 3,
                current: 1
            })
        );
        assert!(!session.equip_rod("training"));
        assert!(session.equip_rod("basic"));
    }

    #[test]
    fn test_daily_claim_once() {
        let mut session = create_test_session();
        assert!(session.claim_daily().is_some());
        assert!(session.claim_daily().is_none());
        assert_eq!(session.progression().gold, 50);
    }

    #[test]
    fn test_finish_records_playtime() {
        let mut session = create_test_session();
        session.tick(test_now() + Duration::seconds(90));
        let profile = session.finish();
        assert!((profile.statistics.total_playtime - 90.0).abs() < 1e-9);
    }
}
