//! Reward fanout: applies one resolved catch to every persisted record.
//!
//! Order matters. Collection and statistics are updated first so that the
//! achievement snapshot sees this catch. Achievement gold is credited after
//! evaluation and evaluation repeats until nothing new unlocks, so wealth
//! achievements reached through other achievements' rewards fire in the
//! same catch.

use crate::achievements::{AchievementDef, AchievementSnapshot};
use crate::character::{lore_by_id, LoreEntry, Stat, TraitDef, HIDDEN_TRAITS};
use crate::core::constants::{
    LUCK_GAIN_NORMAL, LUCK_GAIN_SHINY, PATIENCE_GAIN_PER_CATCH, PERCEPTION_GAIN_LEGENDARY_PLUS,
};
use crate::environment::{MoonPhase, Weather};
use crate::fishing::types::{CatchContext, CaughtFish, Rarity, ReactionFlags};
use crate::profile::Profile;
use crate::progression::exp_for_fish;

/// Rod whose catches reveal the `rod_legend` lore.
const LEGEND_ROD_ID: &str = "mythic";
/// Any visible stat at or above this reveals the `hidden_stat` lore.
const HIDDEN_STAT_LORE_THRESHOLD: f64 = 50.0;

/// Everything a single catch changed.
#[derive(Debug, Clone)]
pub struct CatchOutcome {
    pub fish: CaughtFish,
    pub flags: ReactionFlags,
    pub exp_gained: u64,
    /// Levels reached, in order.
    pub levels_gained: Vec<u32>,
    /// First time this species was caught in any form.
    pub new_species: bool,
    pub collection_completed: bool,
    pub achievements: Vec<&'static AchievementDef>,
    pub achievement_gold: u64,
    pub traits_unlocked: Vec<&'static TraitDef>,
    pub lore_discovered: Vec<&'static LoreEntry>,
}

impl CatchOutcome {
    /// Fish value plus achievement rewards.
    pub fn total_gold(&self) -> u64 {
        self.fish.value + self.achievement_gold
    }
}

/// Applies a catch to the profile as one logical step.
pub fn apply_catch(
    profile: &mut Profile,
    fish: CaughtFish,
    ctx: &CatchContext,
    now: i64,
) -> CatchOutcome {
    let flags = ReactionFlags::evaluate(fish.reaction_time, ctx.line_ticks);
    let rarity = fish.rarity();

    let new_species = !profile.collection.has_caught(fish.species.id);
    profile.collection.add_catch(fish.species.id, fish.is_shiny);
    profile.statistics.record_catch(&fish, ctx);

    nudge_stats(profile, &fish);

    profile.progression.add_gold(fish.value);
    let exp_gained = exp_for_fish(rarity, fish.is_shiny);
    let levels_gained = profile.progression.add_experience(exp_gained);
    profile.statistics.record_exp(exp_gained);

    let collection_completed =
        profile.collection.is_complete() && profile.statistics.mark_collection_complete(now);

    let (achievements, achievement_gold) = evaluate_achievements(profile, flags, now);
    let traits_unlocked = unlock_traits(profile);
    let lore_discovered = discover_lore(profile, &fish, ctx, flags);

    tracing::debug!(
        species = fish.species.id,
        shiny = fish.is_shiny,
        value = fish.value,
        exp = exp_gained,
        "catch applied"
    );

    CatchOutcome {
        fish,
        flags,
        exp_gained,
        levels_gained,
        new_species,
        collection_completed,
        achievements,
        achievement_gold,
        traits_unlocked,
        lore_discovered,
    }
}

/// A fish escaped the reaction window.
pub fn apply_miss(profile: &mut Profile) {
    profile.statistics.record_miss();
}

/// Today's login reward, credited to the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyClaim {
    pub gold: u64,
    pub exp: u64,
    pub streak: u32,
    pub levels_gained: u32,
}

/// Claims today's login reward, if there is one left.
pub fn claim_daily_reward(profile: &mut Profile) -> Option<DailyClaim> {
    let (gold, exp) = profile.daily.claim_daily_reward()?;
    profile.progression.add_gold(gold);
    let levels = profile.progression.add_experience(exp);
    profile.statistics.record_exp(exp);
    Some(DailyClaim {
        gold,
        exp,
        streak: profile.daily.current_streak,
        levels_gained: levels.len() as u32,
    })
}

fn nudge_stats(profile: &mut Profile, fish: &CaughtFish) {
    let stats = &mut profile.character;
    let luck = if fish.is_shiny {
        LUCK_GAIN_SHINY
    } else {
        LUCK_GAIN_NORMAL
    };
    stats.add_stat(Stat::Luck, luck);
    stats.add_stat(Stat::Patience, PATIENCE_GAIN_PER_CATCH);
    if fish.rarity() >= Rarity::Legendary {
        stats.add_stat(Stat::Perception, PERCEPTION_GAIN_LEGENDARY_PLUS);
    }
}

fn evaluate_achievements(
    profile: &mut Profile,
    flags: ReactionFlags,
    now: i64,
) -> (Vec<&'static AchievementDef>, u64) {
    let mut unlocked = Vec::new();
    let mut gold = 0;
    loop {
        let snapshot = AchievementSnapshot::capture(
            &profile.collection,
            &profile.statistics,
            &profile.progression,
            flags,
        );
        let newly = profile.achievements.evaluate(&snapshot, now);
        if newly.is_empty() {
            break;
        }
        for def in &newly {
            profile.progression.add_gold(def.gold_reward);
            gold += def.gold_reward;
        }
        unlocked.extend(newly);
    }
    (unlocked, gold)
}

fn unlock_traits(profile: &mut Profile) -> Vec<&'static TraitDef> {
    let lifetime_gold = profile.progression.lifetime_gold;
    let mut unlocked = Vec::new();
    for def in HIDDEN_TRAITS {
        if profile.character.has_trait(def.id)
            || !def.condition.is_met(&profile.statistics, lifetime_gold)
        {
            continue;
        }
        if profile.character.unlock_trait(def.id) {
            tracing::info!(trait_id = def.id, "trait unlocked");
            unlocked.push(def);
        }
    }
    unlocked
}

fn discover_lore(
    profile: &mut Profile,
    fish: &CaughtFish,
    ctx: &CatchContext,
    flags: ReactionFlags,
) -> Vec<&'static LoreEntry> {
    let triggers = [
        ("wooper_origin", true),
        ("mythic_legend", fish.rarity() == Rarity::Mythic),
        ("void_mystery", fish.species.void_touched),
        ("aurora_phenomenon", ctx.weather == Weather::Aurora),
        ("moon_blessing", ctx.moon_phase == MoonPhase::Full),
        ("perfect_cast", flags.perfect_cast),
        ("rod_legend", ctx.rod_id == LEGEND_ROD_ID),
        (
            "hidden_stat",
            profile.character.highest_visible() >= HIDDEN_STAT_LORE_THRESHOLD,
        ),
    ];

    let mut discovered = Vec::new();
    for (id, hit) in triggers {
        if !hit || !profile.character.discover_secret(id) {
            continue;
        }
        if let Some(entry) = lore_by_id(id) {
            tracing::info!(lore = id, "lore discovered");
            discovered.push(entry);
        }
    }
    discovered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;
    use crate::environment::TimeOfDay;
    use crate::fishing::catalog::{species_in_tier, SPECIES};
    use crate::fishing::types::Species;

    fn create_test_context() -> CatchContext {
        CatchContext {
            rod_id: "basic",
            weather: Weather::Clear,
            time_of_day: TimeOfDay::Day,
            moon_phase: MoonPhase::Waxing,
            line_ticks: 150,
        }
    }

    fn create_test_fish(species: &'static Species, is_shiny: bool, reaction_time: f64) -> CaughtFish {
        CaughtFish {
            species,
            is_shiny,
            value: if is_shiny {
                species.base_value * 2
            } else {
                species.base_value
            },
            caught_at: 1_000,
            reaction_time,
        }
    }

    fn first_of(rarity: Rarity) -> &'static Species {
        species_in_tier(rarity)[0]
    }

    #[test]
    fn test_first_catch_fans_out_everywhere() {
        let mut profile = Profile::new();
        let fish = create_test_fish(first_of(Rarity::Common), false, 0.8);
        let value = fish.value;
        let outcome = apply_catch(&mut profile, fish, &create_test_context(), 1_000);

        assert!(outcome.new_species);
        assert_eq!(profile.collection.total_catches, 1);
        assert_eq!(profile.statistics.total_catches, 1);
        assert_eq!(profile.statistics.first_catch_time, Some(1_000));
        assert_eq!(outcome.exp_gained, 5);
        assert!(profile.achievements.is_unlocked(AchievementId::FirstCatch));
        assert_eq!(profile.progression.gold, value + outcome.achievement_gold);
        assert_eq!(outcome.total_gold(), profile.progression.gold);
        assert!(profile.character.has_secret("wooper_origin"));
    }

    #[test]
    fn test_stat_nudges() {
        let mut profile = Profile::new();
        let before = profile.character.clone();
        let fish = create_test_fish(first_of(Rarity::Legendary), true, 0.8);
        apply_catch(&mut profile, fish, &create_test_context(), 0);

        let luck = profile.character.get(Stat::Luck) - before.get(Stat::Luck);
        let patience = profile.character.get(Stat::Patience) - before.get(Stat::Patience);
        let perception =
            profile.character.get(Stat::Perception) - before.get(Stat::Perception);
        assert!((luck - LUCK_GAIN_SHINY).abs() < 1e-9);
        assert!((patience - PATIENCE_GAIN_PER_CATCH).abs() < 1e-9);
        assert!((perception - PERCEPTION_GAIN_LEGENDARY_PLUS).abs() < 1e-9);
    }

    #[test]
    fn test_common_catch_leaves_perception() {
        let mut profile = Profile::new();
        let before = profile.character.get(Stat::Perception);
        let fish = create_test_fish(first_of(Rarity::Common), false, 0.8);
        apply_catch(&mut profile, fish, &create_test_context(), 0);
        assert_eq!(profile.character.get(Stat::Perception), before);
    }

    #[test]
    fn test_first_mythic_grants_reward_once() {
        let mut profile = Profile::new();
        let mythic = first_of(Rarity::Mythic);

        let first = apply_catch(
            &mut profile,
            create_test_fish(mythic, false, 0.8),
            &create_test_context(),
            50,
        );
        assert!(first
            .achievements
            .iter()
            .any(|d| d.id == AchievementId::MythicChampion));
        assert_eq!(profile.statistics.first_mythic_time, Some(50));
        let awarded = profile.achievements.total_gold_awarded;

        let second = apply_catch(
            &mut profile,
            create_test_fish(mythic, false, 0.8),
            &create_test_context(),
            60,
        );
        assert!(!second
            .achievements
            .iter()
            .any(|d| d.id == AchievementId::MythicChampion));
        assert_eq!(profile.statistics.first_mythic_time, Some(50));
        assert_eq!(profile.achievements.total_gold_awarded, awarded);
    }

    #[test]
    fn test_achievement_gold_counts_toward_wealth() {
        let mut profile = Profile::new();
        profile.progression.add_gold(990);
        let fish = create_test_fish(first_of(Rarity::Common), false, 0.8);
        let outcome = apply_catch(&mut profile, fish, &create_test_context(), 0);
        // First Catch pays 50, which pushes lifetime gold past 1,000.
        assert!(outcome
            .achievements
            .iter()
            .any(|d| d.id == AchievementId::FirstFortune));
    }

    #[test]
    fn test_quick_and_patient_flags() {
        let mut profile = Profile::new();
        let fish = create_test_fish(first_of(Rarity::Common), false, 0.4);
        let outcome = apply_catch(&mut profile, fish, &create_test_context(), 0);
        assert!(outcome.flags.quick_catch);
        assert!(!outcome.flags.patient_catch);
        assert!(profile.achievements.is_unlocked(AchievementId::QuickReflexes));
        assert!(!profile.achievements.is_unlocked(AchievementId::PatientFisher));

        let ctx = CatchContext {
            line_ticks: 400,
            ..create_test_context()
        };
        let fish = create_test_fish(first_of(Rarity::Common), false, 3.5);
        let outcome = apply_catch(&mut profile, fish, &ctx, 0);
        assert!(outcome.flags.patient_catch);
        assert!(!outcome.flags.quick_catch);
        assert!(profile.achievements.is_unlocked(AchievementId::PatientFisher));
    }

    #[test]
    fn test_lore_triggers() {
        let mut profile = Profile::new();
        let ctx = CatchContext {
            rod_id: LEGEND_ROD_ID,
            weather: Weather::Aurora,
            moon_phase: MoonPhase::Full,
            ..create_test_context()
        };
        let fish = create_test_fish(first_of(Rarity::Mythic), false, 0.1);
        let outcome = apply_catch(&mut profile, fish, &ctx, 0);
        let ids: Vec<_> = outcome.lore_discovered.iter().map(|l| l.id).collect();
        for id in [
            "wooper_origin",
            "mythic_legend",
            "aurora_phenomenon",
            "moon_blessing",
            "perfect_cast",
            "rod_legend",
        ] {
            assert!(ids.contains(&id), "missing lore {id}");
        }
        assert!(!ids.contains(&"hidden_stat"));

        let again = apply_catch(
            &mut profile,
            create_test_fish(first_of(Rarity::Mythic), false, 0.1),
            &ctx,
            0,
        );
        assert!(again.lore_discovered.is_empty());
    }

    #[test]
    fn test_void_touched_lore() {
        let void_species = SPECIES.iter().find(|s| s.void_touched).unwrap();
        let mut profile = Profile::new();
        let fish = create_test_fish(void_species, false, 0.8);
        apply_catch(&mut profile, fish, &create_test_context(), 0);
        assert!(profile.character.has_secret("void_mystery"));
    }

    #[test]
    fn test_miss_breaks_streak() {
        let mut profile = Profile::new();
        for _ in 0..3 {
            let fish = create_test_fish(first_of(Rarity::Common), false, 0.8);
            apply_catch(&mut profile, fish, &create_test_context(), 0);
        }
        assert_eq!(profile.statistics.current_streak, 3);
        apply_miss(&mut profile);
        assert_eq!(profile.statistics.current_streak, 0);
        assert_eq!(profile.statistics.best_catch_streak, 3);
        assert_eq!(profile.statistics.missed_catches, 1);
    }

    #[test]
    fn test_weather_sage_trait() {
        let mut profile = Profile::new();
        for weather in Weather::ALL {
            let ctx = CatchContext {
                weather,
                ..create_test_context()
            };
            let fish = create_test_fish(first_of(Rarity::Common), false, 0.8);
            apply_catch(&mut profile, fish, &ctx, 0);
        }
        assert!(profile.character.has_trait("weather_sage"));
    }

    #[test]
    fn test_pacing_and_void_traits() {
        let void_species = SPECIES.iter().find(|s| s.void_touched).unwrap();
        let mut profile = Profile::new();
        let mut unlocked = Vec::new();
        for i in 0..10 {
            let fish = CaughtFish {
                caught_at: 1_000 + i * 5,
                ..create_test_fish(void_species, false, 0.8)
            };
            let outcome = apply_catch(&mut profile, fish, &create_test_context(), 1_000 + i * 5);
            unlocked.extend(outcome.traits_unlocked.iter().map(|t| t.id));
        }
        assert_eq!(unlocked, vec!["void_seeker", "speedrunner"]);
        assert!(!profile.character.has_trait("patient_monk"));

        let fish = CaughtFish {
            caught_at: 1_045 + 600,
            ..create_test_fish(first_of(Rarity::Common), false, 0.8)
        };
        let outcome = apply_catch(&mut profile, fish, &create_test_context(), 1_645);
        let ids: Vec<_> = outcome.traits_unlocked.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["patient_monk"]);
    }

    #[test]
    fn test_daily_claim_credits_profile() {
        let mut profile = Profile::new();
        assert!(claim_daily_reward(&mut profile).is_none());

        let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        profile.daily.check_daily_login(today);
        let claim = claim_daily_reward(&mut profile).unwrap();
        assert_eq!((claim.gold, claim.exp, claim.streak), (50, 25, 1));
        assert_eq!(profile.progression.gold, 50);
        assert_eq!(profile.progression.experience, 25);
        assert!(claim_daily_reward(&mut profile).is_none());
    }
}
