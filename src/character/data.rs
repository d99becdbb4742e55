//! Hidden trait and lore catalogs.

use crate::environment::Weather;
use crate::progression::ROD_CATALOG;
use crate::statistics::Statistics;

/// What must hold for a hidden trait to unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitCondition {
    NightCatches(u64),
    PerfectCasts(u64),
    TotalShinies(u64),
    BestStreak(u32),
    /// At least one catch in every weather.
    AllWeathers,
    /// At least this many catches with every rod in the catalog.
    CatchesWithEveryRod(u64),
    LifetimeGold(u64),
    VoidCatches(u64),
    /// `CATCH_BURST_SIZE` consecutive catches inside this many seconds.
    CatchBurstUnder(i64),
    /// Two consecutive catches at least this many seconds apart.
    CatchGapAtLeast(i64),
}

impl TraitCondition {
    pub fn is_met(&self, statistics: &Statistics, lifetime_gold: u64) -> bool {
        match *self {
            TraitCondition::NightCatches(n) => statistics.night_catches() >= n,
            TraitCondition::PerfectCasts(n) => statistics.perfect_casts >= n,
            TraitCondition::TotalShinies(n) => statistics.total_shinies >= n,
            TraitCondition::BestStreak(n) => statistics.best_catch_streak >= n,
            TraitCondition::AllWeathers => Weather::ALL
                .iter()
                .all(|w| statistics.catches_in_weather(*w) > 0),
            TraitCondition::CatchesWithEveryRod(n) => ROD_CATALOG
                .iter()
                .all(|rod| statistics.catches_with_rod(rod.id) >= n),
            TraitCondition::LifetimeGold(n) => lifetime_gold >= n,
            TraitCondition::VoidCatches(n) => statistics.void_catches >= n,
            TraitCondition::CatchBurstUnder(secs) => statistics
                .fastest_catch_burst
                .is_some_and(|span| span < secs),
            TraitCondition::CatchGapAtLeast(secs) => statistics.longest_catch_gap >= secs,
        }
    }
}

/// A secret trait. Effects are descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub effect: &'static str,
    /// Hidden from the trait list until unlocked.
    pub secret: bool,
    pub condition: TraitCondition,
}

pub const HIDDEN_TRAITS: &[TraitDef] = &[
    TraitDef {
        id: "moonlight_fisher",
        name: "Moonlight Fisher",
        description: "Catch 100 fish at night",
        effect: "The night water knows your name",
        secret: true,
        condition: TraitCondition::NightCatches(100),
    },
    TraitDef {
        id: "perfect_cast",
        name: "Perfect Cast",
        description: "Land 50 perfect reels",
        effect: "Your hands move before the bobber does",
        secret: true,
        condition: TraitCondition::PerfectCasts(50),
    },
    TraitDef {
        id: "void_seeker",
        name: "Void Seeker",
        description: "Catch 10 void-touched fish",
        effect: "The dark water stops feeling empty",
        secret: true,
        condition: TraitCondition::VoidCatches(10),
    },
    TraitDef {
        id: "shiny_master",
        name: "Shiny Master",
        description: "Catch 100 shiny fish",
        effect: "Glints catch your eye from across the lake",
        secret: true,
        condition: TraitCondition::TotalShinies(100),
    },
    TraitDef {
        id: "combo_king",
        name: "Combo King",
        description: "Reach a 50-catch streak",
        effect: "Momentum is a habit",
        secret: true,
        condition: TraitCondition::BestStreak(50),
    },
    TraitDef {
        id: "weather_sage",
        name: "Weather Sage",
        description: "Catch a fish in every kind of weather",
        effect: "You read the sky like a tide chart",
        secret: false,
        condition: TraitCondition::AllWeathers,
    },
    TraitDef {
        id: "rod_master",
        name: "Rod Master",
        description: "Catch 100 fish with every rod",
        effect: "Any rod feels like your own",
        secret: false,
        condition: TraitCondition::CatchesWithEveryRod(100),
    },
    TraitDef {
        id: "speedrunner",
        name: "Speedrunner",
        description: "Catch 10 fish in under 2 minutes",
        effect: "The lake can barely keep up",
        secret: true,
        condition: TraitCondition::CatchBurstUnder(120),
    },
    TraitDef {
        id: "patient_monk",
        name: "Patient Monk",
        description: "Wait 10 minutes before catching a fish",
        effect: "Stillness is its own bait",
        secret: true,
        condition: TraitCondition::CatchGapAtLeast(600),
    },
    TraitDef {
        id: "golden_touch",
        name: "Golden Touch",
        description: "Earn 1,000,000 gold over a lifetime",
        effect: "Coins seem to find you",
        secret: false,
        condition: TraitCondition::LifetimeGold(1_000_000),
    },
];

pub fn trait_by_id(id: &str) -> Option<&'static TraitDef> {
    HIDDEN_TRAITS.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoreEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const LORE: &[LoreEntry] = &[
    LoreEntry {
        id: "wooper_origin",
        title: "The First Line",
        text: "Every angler on this shore learned from someone. Someone learned first.",
    },
    LoreEntry {
        id: "mythic_legend",
        title: "Fish of Legend",
        text: "Some fish are rumors until the day one is flopping on your dock.",
    },
    LoreEntry {
        id: "void_mystery",
        title: "Between the Ripples",
        text: "A few species never seem to come from the water they are pulled out of.",
    },
    LoreEntry {
        id: "aurora_phenomenon",
        title: "Sky Fire",
        text: "When the aurora burns, the lake hums back at it.",
    },
    LoreEntry {
        id: "moon_blessing",
        title: "Full Moon Tide",
        text: "Under a full moon, everything in the water drifts toward the surface.",
    },
    LoreEntry {
        id: "perfect_cast",
        title: "Stillness",
        text: "Old hands say the best reel happens before you decide to make it.",
    },
    LoreEntry {
        id: "rod_legend",
        title: "The Mythic Rod",
        text: "Nobody remembers who made it. Everyone remembers the first time they held it.",
    },
    LoreEntry {
        id: "hidden_stat",
        title: "More Than Skill",
        text: "Past a point, fishing stops being technique and starts being a conversation.",
    },
];

pub fn lore_by_id(id: &str) -> Option<&'static LoreEntry> {
    LORE.iter().find(|l| l.id == id)
}
