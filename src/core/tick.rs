//! Per-tick orchestration.
//!
//! `game_tick()` advances the environment and the encounter by one tick,
//! resolves a pending reel, and applies the reward fanout. It returns a
//! [`TickResult`] describing what happened. Persistence is the caller's job.

use chrono::NaiveDateTime;
use rand::Rng;

use crate::achievements::AchievementId;
use crate::environment::{EnvironmentState, WeatherChange};
use crate::fishing::encounter::{EncounterEvent, EncounterState, FishingEncounter};
use crate::fishing::resolve::{resolve_catch, CatchRequest, MultiplierBreakdown};
use crate::fishing::types::{CatchContext, Vec2};
use crate::profile::Profile;
use crate::rewards::{apply_catch, apply_miss, CatchOutcome};

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Environment ─────────────────────────────────────────────
    WeatherChanged(WeatherChange),
    /// The calendar day rolled over; daily counters were reset.
    DailyReset,

    // ── Encounter ───────────────────────────────────────────────
    LineOut { bobber: Vec2, bite_deadline: u32 },
    Bite,
    /// The fish got away before the reel.
    Escaped,
    ReturnedToIdle,

    // ── Catch ───────────────────────────────────────────────────
    FishCaught {
        species_id: &'static str,
        name: String,
        is_shiny: bool,
        value: u64,
    },
    LevelUp { level: u32 },
    AchievementUnlocked { id: AchievementId, gold_reward: u64 },
    TraitUnlocked { id: &'static str },
    LoreDiscovered { id: &'static str },
}

/// A resolved catch and the multipliers that shaped it.
#[derive(Debug, Clone)]
pub struct CatchReport {
    pub outcome: CatchOutcome,
    pub breakdown: MultiplierBreakdown,
}

#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in order.
    pub events: Vec<TickEvent>,

    /// The catch resolved this tick, if any.
    pub catch: Option<CatchReport>,

    /// True if any persisted record changed and should be saved.
    pub profile_changed: bool,
}

/// Processes one game tick.
///
/// `now` is sampled once by the caller so every reader in the tick sees the
/// same time of day and moon phase.
pub fn game_tick<R: Rng>(
    profile: &mut Profile,
    environment: &mut EnvironmentState,
    encounter: &mut FishingEncounter,
    now: NaiveDateTime,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();

    // ── 1. Calendar and weather ─────────────────────────────────
    if profile.statistics.check_daily_reset(now.date()) {
        result.events.push(TickEvent::DailyReset);
        result.profile_changed = true;
    }
    if let Some(change) = environment.tick(now, rng) {
        result.events.push(TickEvent::WeatherChanged(change));
    }

    // ── 2. Advance the encounter ────────────────────────────────
    let breakdown =
        MultiplierBreakdown::capture(environment, &profile.character, profile.progression.equipped());
    if let Some(event) = encounter.tick(rng, breakdown.composed.bite_speed_mult) {
        match event {
            EncounterEvent::LineOut {
                bobber,
                bite_deadline,
            } => result.events.push(TickEvent::LineOut {
                bobber,
                bite_deadline,
            }),
            EncounterEvent::Bite => result.events.push(TickEvent::Bite),
            EncounterEvent::Escaped => {
                apply_miss(profile);
                result.profile_changed = true;
                result.events.push(TickEvent::Escaped);
            }
            EncounterEvent::ReturnedToIdle => result.events.push(TickEvent::ReturnedToIdle),
        }
    }

    // ── 3. Resolve a pending reel ───────────────────────────────
    if encounter.state() == EncounterState::Reeling {
        if let Some(timing) = encounter.finish_reel() {
            let request = CatchRequest {
                multipliers: breakdown.composed,
                reaction_time: timing.reaction_time(),
                caught_at: now.and_utc().timestamp(),
                force_shiny: false,
            };
            let fish = resolve_catch(rng, &request);
            let ctx = CatchContext {
                rod_id: profile.progression.equipped().id,
                weather: environment.weather,
                time_of_day: environment.time_of_day,
                moon_phase: environment.moon_phase,
                line_ticks: timing.line_ticks,
            };
            let outcome = apply_catch(profile, fish, &ctx, request.caught_at);
            push_catch_events(&mut result.events, &outcome);
            result.catch = Some(CatchReport { outcome, breakdown });
            result.profile_changed = true;
        }
    }

    // ── 4. Notifications ────────────────────────────────────────
    profile.achievements.tick_notifications();

    result
}

fn push_catch_events(events: &mut Vec<TickEvent>, outcome: &CatchOutcome) {
    let fish = &outcome.fish;
    events.push(TickEvent::FishCaught {
        species_id: fish.species.id,
        name: fish.display_name(),
        is_shiny: fish.is_shiny,
        value: fish.value,
    });
    for &level in &outcome.levels_gained {
        events.push(TickEvent::LevelUp { level });
    }
    for def in &outcome.achievements {
        events.push(TickEvent::AchievementUnlocked {
            id: def.id,
            gold_reward: def.gold_reward,
        });
    }
    for def in &outcome.traits_unlocked {
        events.push(TickEvent::TraitUnlocked { id: def.id });
    }
    for entry in &outcome.lore_discovered {
        events.push(TickEvent::LoreDiscovered { id: entry.id });
    }
}
