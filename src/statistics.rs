//! Lifetime fishing statistics and records.
//!
//! Totals only grow. Milestone timestamps are written once and never changed.

use std::collections::{BTreeMap, VecDeque};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::constants::CATCH_BURST_SIZE;
use crate::environment::{MoonPhase, TimeOfDay, Weather};
use crate::fishing::types::{CatchContext, CaughtFish, Rarity, ReactionFlags};

/// The single most valuable fish landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRecord {
    pub species_id: String,
    pub name: String,
    pub value: u64,
}

/// The rarest fish landed. Ties keep the earlier catch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityRecord {
    pub species_id: String,
    pub name: String,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Statistics {
    // Catches
    pub total_catches: u64,
    pub total_shinies: u64,
    pub total_gold_earned: u64,
    pub total_exp_earned: u64,
    pub catches_by_rarity: BTreeMap<Rarity, u64>,
    /// Catches of void-touched species.
    pub void_catches: u64,

    // Casting
    pub total_casts: u64,
    pub successful_catches: u64,
    pub missed_catches: u64,
    /// Reels faster than the perfect-cast threshold.
    pub perfect_casts: u64,
    /// Fastest reaction, in seconds.
    pub fastest_catch: Option<f64>,
    /// Slowest reaction, in seconds.
    pub slowest_catch: Option<f64>,

    // Streaks
    pub current_streak: u32,
    pub best_catch_streak: u32,
    pub current_shiny_streak: u32,
    pub best_shiny_streak: u32,
    pub current_perfect_streak: u32,
    pub best_perfect_streak: u32,

    // Conditions
    pub catches_by_weather: BTreeMap<Weather, u64>,
    pub catches_by_time: BTreeMap<TimeOfDay, u64>,
    pub catches_by_moon: BTreeMap<MoonPhase, u64>,
    pub catches_by_rod: BTreeMap<String, u64>,

    // Milestones (Unix seconds, set once)
    pub first_catch_time: Option<i64>,
    pub first_shiny_time: Option<i64>,
    pub first_mythic_time: Option<i64>,
    pub collection_complete_time: Option<i64>,

    // Records
    pub most_valuable_fish: Option<ValueRecord>,
    pub rarest_catch: Option<RarityRecord>,

    // Pacing (Unix seconds)
    pub last_catch_time: Option<i64>,
    /// Longest gap between two consecutive catches.
    pub longest_catch_gap: i64,
    /// Timestamps of the latest `CATCH_BURST_SIZE` catches, oldest first.
    pub recent_catch_times: VecDeque<i64>,
    /// Shortest span covering `CATCH_BURST_SIZE` consecutive catches.
    pub fastest_catch_burst: Option<i64>,

    // Sessions (seconds)
    pub total_sessions: u64,
    pub total_playtime: f64,
    pub longest_session: f64,

    // Daily
    pub catches_today: u64,
    pub gold_today: u64,
    pub last_daily_reset: Option<NaiveDate>,
}

fn set_once(slot: &mut Option<i64>, at: i64) -> bool {
    if slot.is_some() {
        return false;
    }
    *slot = Some(at);
    true
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cast(&mut self) {
        self.total_casts += 1;
    }

    /// A fish escaped: breaks every streak.
    pub fn record_miss(&mut self) {
        self.missed_catches += 1;
        self.current_streak = 0;
        self.current_shiny_streak = 0;
        self.current_perfect_streak = 0;
    }

    pub fn record_catch(&mut self, fish: &CaughtFish, ctx: &CatchContext) {
        let flags = ReactionFlags::evaluate(fish.reaction_time, ctx.line_ticks);
        let rarity = fish.rarity();
        let at = fish.caught_at;

        self.total_catches += 1;
        self.successful_catches += 1;
        self.catches_today += 1;
        *self.catches_by_rarity.entry(rarity).or_default() += 1;
        if fish.species.void_touched {
            self.void_catches += 1;
        }

        self.total_gold_earned += fish.value;
        self.gold_today += fish.value;

        *self.catches_by_weather.entry(ctx.weather).or_default() += 1;
        *self.catches_by_time.entry(ctx.time_of_day).or_default() += 1;
        *self.catches_by_moon.entry(ctx.moon_phase).or_default() += 1;
        *self.catches_by_rod.entry(ctx.rod_id.to_string()).or_default() += 1;

        self.fastest_catch = Some(match self.fastest_catch {
            Some(t) => t.min(fish.reaction_time),
            None => fish.reaction_time,
        });
        self.slowest_catch = Some(match self.slowest_catch {
            Some(t) => t.max(fish.reaction_time),
            None => fish.reaction_time,
        });

        self.current_streak += 1;
        self.best_catch_streak = self.best_catch_streak.max(self.current_streak);

        if fish.is_shiny {
            self.total_shinies += 1;
            self.current_shiny_streak += 1;
            self.best_shiny_streak = self.best_shiny_streak.max(self.current_shiny_streak);
            set_once(&mut self.first_shiny_time, at);
        } else {
            self.current_shiny_streak = 0;
        }

        if flags.perfect_cast {
            self.perfect_casts += 1;
            self.current_perfect_streak += 1;
            self.best_perfect_streak = self.best_perfect_streak.max(self.current_perfect_streak);
        } else {
            self.current_perfect_streak = 0;
        }

        self.record_pacing(at);

        set_once(&mut self.first_catch_time, at);
        if rarity == Rarity::Mythic {
            set_once(&mut self.first_mythic_time, at);
        }

        let beats_value = self
            .most_valuable_fish
            .as_ref()
            .map_or(true, |r| fish.value > r.value);
        if beats_value {
            self.most_valuable_fish = Some(ValueRecord {
                species_id: fish.species.id.to_string(),
                name: fish.display_name(),
                value: fish.value,
            });
        }

        let beats_rarity = self
            .rarest_catch
            .as_ref()
            .map_or(true, |r| rarity > r.rarity);
        if beats_rarity {
            self.rarest_catch = Some(RarityRecord {
                species_id: fish.species.id.to_string(),
                name: fish.display_name(),
                rarity,
            });
        }
    }

    fn record_pacing(&mut self, at: i64) {
        if let Some(prev) = self.last_catch_time {
            self.longest_catch_gap = self.longest_catch_gap.max(at - prev);
        }
        self.last_catch_time = Some(at);

        self.recent_catch_times.push_back(at);
        while self.recent_catch_times.len() > CATCH_BURST_SIZE {
            self.recent_catch_times.pop_front();
        }
        if self.recent_catch_times.len() == CATCH_BURST_SIZE {
            if let Some(&oldest) = self.recent_catch_times.front() {
                let span = at - oldest;
                self.fastest_catch_burst =
                    Some(self.fastest_catch_burst.map_or(span, |best| best.min(span)));
            }
        }
    }

    pub fn record_exp(&mut self, amount: u64) {
        self.total_exp_earned += amount;
    }

    /// Returns true the first time it is called.
    pub fn mark_collection_complete(&mut self, at: i64) -> bool {
        set_once(&mut self.collection_complete_time, at)
    }

    /// Zeroes the daily counters when `today` differs from the last reset.
    pub fn check_daily_reset(&mut self, today: NaiveDate) -> bool {
        if self.last_daily_reset == Some(today) {
            return false;
        }
        self.catches_today = 0;
        self.gold_today = 0;
        self.last_daily_reset = Some(today);
        true
    }

    pub fn begin_session(&mut self) {
        self.total_sessions += 1;
    }

    /// Folds a finished session's length into the playtime totals.
    pub fn end_session(&mut self, seconds: f64) {
        if !seconds.is_finite() || seconds <= 0.0 {
            return;
        }
        self.total_playtime += seconds;
        self.longest_session = self.longest_session.max(seconds);
    }

    // ---- queries ----

    pub fn catches_of_rarity(&self, rarity: Rarity) -> u64 {
        self.catches_by_rarity.get(&rarity).copied().unwrap_or(0)
    }

    /// Catches of `rarity` or any rarer tier.
    pub fn catches_at_least(&self, rarity: Rarity) -> u64 {
        self.catches_by_rarity
            .range(rarity..)
            .map(|(_, n)| *n)
            .sum()
    }

    pub fn catches_in_weather(&self, weather: Weather) -> u64 {
        self.catches_by_weather.get(&weather).copied().unwrap_or(0)
    }

    pub fn night_catches(&self) -> u64 {
        self.catches_by_time
            .get(&TimeOfDay::Night)
            .copied()
            .unwrap_or(0)
    }

    pub fn catches_with_rod(&self, rod_id: &str) -> u64 {
        self.catches_by_rod.get(rod_id).copied().unwrap_or(0)
    }

    /// Percentage of finished encounters that ended in a catch.
    pub fn success_rate(&self) -> f64 {
        let attempts = self.successful_catches + self.missed_catches;
        if attempts == 0 {
            return 0.0;
        }
        self.successful_catches as f64 / attempts as f64 * 100.0
    }

    pub fn shiny_rate(&self) -> f64 {
        if self.total_catches == 0 {
            return 0.0;
        }
        self.total_shinies as f64 / self.total_catches as f64 * 100.0
    }

    pub fn average_gold_per_catch(&self) -> f64 {
        if self.total_catches == 0 {
            return 0.0;
        }
        self.total_gold_earned as f64 / self.total_catches as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::catalog::species_by_id;

    fn create_test_fish(id: &str, shiny: bool, reaction_time: f64, at: i64) -> CaughtFish {
        let species = species_by_id(id).unwrap();
        CaughtFish {
            species,
            is_shiny: shiny,
            value: if shiny { species.base_value * 2 } else { species.base_value },
            caught_at: at,
            reaction_time,
        }
    }

    fn create_test_context() -> CatchContext {
        CatchContext {
            rod_id: "basic",
            weather: Weather::Clear,
            time_of_day: TimeOfDay::Day,
            moon_phase: MoonPhase::Waxing,
            line_ticks: 200,
        }
    }

    #[test]
    fn test_record_catch_counters() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("minnow", false, 0.8, 100), &ctx);
        stats.record_catch(&create_test_fish("salmon", true, 0.2, 200), &ctx);

        assert_eq!(stats.total_catches, 2);
        assert_eq!(stats.total_shinies, 1);
        assert_eq!(stats.total_gold_earned, 10 + 180);
        assert_eq!(stats.catches_of_rarity(Rarity::Common), 1);
        assert_eq!(stats.catches_of_rarity(Rarity::Rare), 1);
        assert_eq!(stats.catches_in_weather(Weather::Clear), 2);
        assert_eq!(stats.catches_with_rod("basic"), 2);
        assert_eq!(stats.perfect_casts, 1);
        assert_eq!(stats.fastest_catch, Some(0.2));
        assert_eq!(stats.slowest_catch, Some(0.8));
    }

    #[test]
    fn test_milestones_set_once() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("prism_fish", true, 1.0, 100), &ctx);
        stats.record_catch(&create_test_fish("moon_whale", true, 1.0, 200), &ctx);

        assert_eq!(stats.first_catch_time, Some(100));
        assert_eq!(stats.first_shiny_time, Some(100));
        assert_eq!(stats.first_mythic_time, Some(100));

        assert!(stats.mark_collection_complete(300));
        assert!(!stats.mark_collection_complete(400));
        assert_eq!(stats.collection_complete_time, Some(300));
    }

    #[test]
    fn test_streaks() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        for i in 0..3 {
            stats.record_catch(&create_test_fish("carp", false, 1.0, i), &ctx);
        }
        assert_eq!(stats.current_streak, 3);
        stats.record_miss();
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_catch_streak, 3);
        stats.record_catch(&create_test_fish("carp", false, 1.0, 9), &ctx);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_catch_streak, 3);
    }

    #[test]
    fn test_catches_at_least() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("carp", false, 1.0, 1), &ctx);
        stats.record_catch(&create_test_fish("tuna", false, 1.0, 2), &ctx);
        stats.record_catch(&create_test_fish("golden_koi", false, 1.0, 3), &ctx);

        assert_eq!(stats.catches_at_least(Rarity::Common), 3);
        assert_eq!(stats.catches_at_least(Rarity::Uncommon), 2);
        assert_eq!(stats.catches_at_least(Rarity::Epic), 2);
        assert_eq!(stats.catches_at_least(Rarity::Legendary), 1);
        assert_eq!(stats.catches_at_least(Rarity::Mythic), 0);
    }

    #[test]
    fn test_records() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("golden_koi", false, 1.0, 1), &ctx);
        stats.record_catch(&create_test_fish("tuna", true, 1.0, 2), &ctx);

        let valuable = stats.most_valuable_fish.clone().unwrap();
        assert_eq!(valuable.species_id, "golden_koi");
        assert_eq!(valuable.value, 600);
        assert_eq!(stats.rarest_catch.clone().unwrap().rarity, Rarity::Legendary);
    }

    #[test]
    fn test_void_catches_counted() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("void_fish", false, 1.0, 1), &ctx);
        stats.record_catch(&create_test_fish("carp", false, 1.0, 2), &ctx);
        stats.record_catch(&create_test_fish("anglerfish", true, 1.0, 3), &ctx);
        assert_eq!(stats.void_catches, 2);
    }

    #[test]
    fn test_catch_pacing() {
        let mut stats = Statistics::new();
        let ctx = create_test_context();
        // Nine quick catches, a long pause, then a steady run.
        for t in 0..9 {
            stats.record_catch(&create_test_fish("carp", false, 1.0, t * 20), &ctx);
        }
        assert_eq!(stats.fastest_catch_burst, None);
        assert_eq!(stats.longest_catch_gap, 20);

        stats.record_catch(&create_test_fish("carp", false, 1.0, 1_000), &ctx);
        assert_eq!(stats.longest_catch_gap, 1_000 - 160);
        assert_eq!(stats.fastest_catch_burst, Some(1_000));

        for t in 1..=9 {
            stats.record_catch(&create_test_fish("carp", false, 1.0, 1_000 + t * 10), &ctx);
        }
        assert_eq!(stats.recent_catch_times.len(), CATCH_BURST_SIZE);
        assert_eq!(stats.fastest_catch_burst, Some(90));
        assert_eq!(stats.last_catch_time, Some(1_090));
    }

    #[test]
    fn test_daily_reset() {
        let mut stats = Statistics::new();
        let day1 = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let day2 = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        stats.check_daily_reset(day1);
        stats.record_catch(&create_test_fish("carp", false, 1.0, 1), &create_test_context());
        assert!(!stats.check_daily_reset(day1));
        assert_eq!(stats.catches_today, 1);
        assert!(stats.check_daily_reset(day2));
        assert_eq!(stats.catches_today, 0);
        assert_eq!(stats.gold_today, 0);
        assert_eq!(stats.total_catches, 1);
    }

    #[test]
    fn test_rates() {
        let mut stats = Statistics::new();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.shiny_rate(), 0.0);
        let ctx = create_test_context();
        stats.record_catch(&create_test_fish("carp", true, 1.0, 1), &ctx);
        stats.record_catch(&create_test_fish("carp", false, 1.0, 2), &ctx);
        stats.record_miss();
        stats.record_miss();
        assert_eq!(stats.success_rate(), 50.0);
        assert_eq!(stats.shiny_rate(), 50.0);
        assert_eq!(stats.average_gold_per_catch(), 27.0);
    }

    #[test]
    fn test_session_playtime() {
        let mut stats = Statistics::new();
        stats.begin_session();
        stats.end_session(120.0);
        stats.begin_session();
        stats.end_session(60.0);
        assert_eq!(stats.total_sessions, 2);
        assert_eq!(stats.total_playtime, 180.0);
        assert_eq!(stats.longest_session, 120.0);
    }

    #[test]
    fn test_serializes_with_string_keys() {
        let mut stats = Statistics::new();
        stats.record_catch(&create_test_fish("carp", false, 1.0, 1), &create_test_context());
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"common\":1"));
        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
