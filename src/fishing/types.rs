//! Fishing data structures: rarity tiers, species definitions, and catches.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    PATIENT_CATCH_TICKS, PERFECT_CAST_SECONDS, QUICK_CATCH_SECONDS, WATER_MAX_X, WATER_MAX_Y,
    WATER_MIN_X, WATER_MIN_Y,
};
use crate::environment::{MoonPhase, TimeOfDay, Weather};

/// Rarity tiers for fish species, ordered from most to least common.
///
/// The ordering is total, so "X or rarer" queries are plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Display color for the tier (presentation metadata).
    pub fn color(self) -> Rgb {
        match self {
            Rarity::Common => (200, 200, 200),
            Rarity::Uncommon => (30, 255, 0),
            Rarity::Rare => (0, 112, 221),
            Rarity::Epic => (163, 53, 238),
            Rarity::Legendary => (255, 128, 0),
            Rarity::Mythic => (255, 40, 40),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub type Rgb = (u8, u8, u8);

/// Static definition of a fish species.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    /// Gold value of a normal (non-shiny) catch.
    pub base_value: u64,
    pub color: Rgb,
    pub shiny_color: Rgb,
    /// Drawn more often under a new moon.
    pub void_touched: bool,
    pub flavor: &'static str,
}

/// A fish produced by a successful reel.
///
/// Lives only between catch resolution and the reward fanout.
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtFish {
    pub species: &'static Species,
    pub is_shiny: bool,
    /// Final gold value (base value, doubled when shiny).
    pub value: u64,
    /// Unix timestamp (seconds) of the catch.
    pub caught_at: i64,
    /// Seconds from bite onset to the reel input.
    pub reaction_time: f64,
}

impl CaughtFish {
    pub fn rarity(&self) -> Rarity {
        self.species.rarity
    }

    pub fn display_name(&self) -> String {
        if self.is_shiny {
            format!("Shiny {}", self.species.name)
        } else {
            self.species.name.to_string()
        }
    }

    pub fn display_color(&self) -> Rgb {
        if self.is_shiny {
            self.species.shiny_color
        } else {
            self.species.color
        }
    }
}

/// Conditions a catch was made under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchContext {
    pub rod_id: &'static str,
    pub weather: Weather,
    pub time_of_day: TimeOfDay,
    pub moon_phase: MoonPhase,
    /// Ticks the line spent in the water (waiting plus bite).
    pub line_ticks: u32,
}

/// Reaction-derived flags for a single catch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionFlags {
    pub quick_catch: bool,
    pub perfect_cast: bool,
    pub patient_catch: bool,
}

impl ReactionFlags {
    /// A zero reaction (reeled on the bite tick itself) earns no timing flag.
    pub fn evaluate(reaction_time: f64, line_ticks: u32) -> Self {
        let timed = reaction_time > 0.0;
        Self {
            quick_catch: timed && reaction_time < QUICK_CATCH_SECONDS,
            perfect_cast: timed && reaction_time < PERFECT_CAST_SECONDS,
            patient_catch: line_ticks > PATIENT_CATCH_TICKS,
        }
    }
}

/// A point in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle of water surface a bobber may land in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterRegion {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl WaterRegion {
    pub const DEFAULT: WaterRegion = WaterRegion {
        min_x: WATER_MIN_X,
        max_x: WATER_MAX_X,
        min_y: WATER_MIN_Y,
        max_y: WATER_MAX_Y,
    };

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}

impl Default for WaterRegion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Mythic);
    }

    #[test]
    fn test_rarity_index_matches_all_order() {
        for (i, rarity) in Rarity::ALL.iter().enumerate() {
            assert_eq!(rarity.index(), i);
        }
    }

    #[test]
    fn test_rarity_serializes_lowercase() {
        let json = serde_json::to_string(&Rarity::Legendary).unwrap();
        assert_eq!(json, "\"legendary\"");
    }

    #[test]
    fn test_reaction_flags() {
        let quick = ReactionFlags::evaluate(0.4, 150);
        assert!(quick.quick_catch);
        assert!(!quick.perfect_cast);
        assert!(!quick.patient_catch);

        let patient = ReactionFlags::evaluate(3.5, 181);
        assert!(!patient.quick_catch);
        assert!(patient.patient_catch);

        assert!(ReactionFlags::evaluate(0.2, 0).perfect_cast);
        assert!(!ReactionFlags::evaluate(1.0, PATIENT_CATCH_TICKS).patient_catch);
    }

    #[test]
    fn test_zero_reaction_earns_no_timing_flags() {
        let flags = ReactionFlags::evaluate(0.0, 120);
        assert!(!flags.quick_catch);
        assert!(!flags.perfect_cast);

        let one_tick = ReactionFlags::evaluate(1.0 / 60.0, 120);
        assert!(one_tick.quick_catch);
        assert!(one_tick.perfect_cast);
    }

    #[test]
    fn test_water_region_clamp() {
        let region = WaterRegion {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 10.0,
            max_y: 50.0,
        };
        let clamped = region.clamp(Vec2::new(-20.0, 80.0));
        assert_eq!(clamped, Vec2::new(0.0, 50.0));
        assert!(region.contains(clamped));
        assert!(!region.contains(Vec2::new(101.0, 20.0)));
    }
}
