//! Catch resolution: multiplier composition, tier/species draws, shiny roll.
//!
//! Resolution only produces a [`CaughtFish`]. Bookkeeping happens in the
//! reward fanout, so the random part and the mutation part test separately.

use rand::Rng;

use super::catalog::{species_in_tier, RARITY_WEIGHTS};
use super::types::{CaughtFish, Rarity, Species};
use crate::character::{CharacterStats, StatMultipliers};
use crate::core::constants::{BASE_SHINY_CHANCE, SHINY_VALUE_MULTIPLIER};
use crate::environment::{
    EnvironmentMultipliers, EnvironmentState, MoonEffect, TimeEffect, WeatherEffect,
};
use crate::progression::Rod;

/// The three independent uniform draws a catch consumes, each in `[0, 1)`.
pub trait CatchRolls {
    fn tier_roll(&mut self) -> f64;
    fn species_roll(&mut self) -> f64;
    fn shiny_roll(&mut self) -> f64;
}

impl<R: Rng> CatchRolls for R {
    fn tier_roll(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn species_roll(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn shiny_roll(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Scripted rolls for exact-outcome tests and replays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRolls {
    pub tier: f64,
    pub species: f64,
    pub shiny: f64,
}

impl CatchRolls for FixedRolls {
    fn tier_roll(&mut self) -> f64 {
        self.tier
    }

    fn species_roll(&mut self) -> f64 {
        self.species
    }

    fn shiny_roll(&mut self) -> f64 {
        self.shiny
    }
}

/// Fully composed multipliers used for one catch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedMultipliers {
    pub rarity_mult: f64,
    pub shiny_mult: f64,
    pub bite_speed_mult: f64,
    pub mythic_boost: f64,
    pub void_mult: f64,
}

impl ComposedMultipliers {
    /// No bias at all: draws follow the catalog weights exactly.
    pub const NEUTRAL: ComposedMultipliers = ComposedMultipliers {
        rarity_mult: 1.0,
        shiny_mult: 1.0,
        bite_speed_mult: 1.0,
        mythic_boost: 0.0,
        void_mult: 1.0,
    };

    /// Folds the equipped rod into the environment multipliers.
    pub fn compose(env: &EnvironmentMultipliers, rod: &Rod) -> Self {
        Self {
            rarity_mult: env.rarity_mult * rod.rarity_mult(),
            shiny_mult: env.shiny_mult * rod.shiny_mult,
            bite_speed_mult: env.bite_speed_mult * rod.bite_speed_mult,
            mythic_boost: env.mythic_boost,
            void_mult: env.void_mult,
        }
    }

    pub fn shiny_chance(&self) -> f64 {
        BASE_SHINY_CHANCE * self.shiny_mult
    }
}

/// Every term that went into a catch's multipliers, for notifications.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplierBreakdown {
    pub weather: WeatherEffect,
    pub time_of_day: TimeEffect,
    pub moon: MoonEffect,
    pub stats: StatMultipliers,
    pub rod_bite_speed: f64,
    pub rod_shiny: f64,
    pub rod_rarity: f64,
    pub composed: ComposedMultipliers,
}

impl MultiplierBreakdown {
    pub fn capture(env: &EnvironmentState, stats: &CharacterStats, rod: &Rod) -> Self {
        let environment = env.get_environment_multipliers(stats);
        Self {
            weather: env.weather.effect(),
            time_of_day: env.time_of_day.effect(),
            moon: env.moon_phase.effect(),
            stats: stats.multipliers(),
            rod_bite_speed: rod.bite_speed_mult,
            rod_shiny: rod.shiny_mult,
            rod_rarity: rod.rarity_mult(),
            composed: ComposedMultipliers::compose(&environment, rod),
        }
    }
}

/// Biases tier weights toward rarer tiers and renormalizes.
///
/// Common keeps its base weight, every rarer tier is scaled by
/// `rarity_mult`, and `mythic_boost` is added to the mythic weight.
pub fn biased_weights(base: &[f64; 6], rarity_mult: f64, mythic_boost: f64) -> [f64; 6] {
    let rarity_mult = if rarity_mult.is_finite() { rarity_mult.max(0.0) } else { 1.0 };
    let mythic_boost = if mythic_boost.is_finite() { mythic_boost.max(0.0) } else { 0.0 };

    let mut weights = *base;
    for w in weights.iter_mut().skip(1) {
        *w *= rarity_mult;
    }
    weights[Rarity::Mythic.index()] += mythic_boost;

    let total: f64 = weights.iter().sum();
    assert!(total > 0.0, "tier weights must have positive mass");
    for w in weights.iter_mut() {
        *w /= total;
    }
    weights
}

/// Maps a uniform roll onto a tier using cumulative weights.
pub fn draw_tier(weights: &[f64; 6], roll: f64) -> Rarity {
    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += weights[rarity.index()];
        if roll < cumulative {
            return rarity;
        }
    }
    // Float rounding can leave the cumulative sum just under 1.0.
    Rarity::ALL
        .into_iter()
        .rev()
        .find(|r| weights[r.index()] > 0.0)
        .unwrap_or(Rarity::Common)
}

/// Picks a species from a tier pool. Void-touched species weigh `void_mult`,
/// everything else weighs 1.
pub fn draw_species(pool: &[&'static Species], roll: f64, void_mult: f64) -> &'static Species {
    assert!(!pool.is_empty(), "species pool must not be empty");
    let void_mult = if void_mult.is_finite() { void_mult.max(0.0) } else { 1.0 };
    let weight = |s: &Species| if s.void_touched { void_mult } else { 1.0 };

    let total: f64 = pool.iter().map(|s| weight(*s)).sum();
    if total <= 0.0 {
        let index = ((roll * pool.len() as f64) as usize).min(pool.len() - 1);
        return pool[index];
    }

    let target = roll * total;
    let mut cumulative = 0.0;
    for species in pool {
        cumulative += weight(*species);
        if target < cumulative {
            return *species;
        }
    }
    pool[pool.len() - 1]
}

/// Shiny iff the roll lands under the base chance times the multiplier.
pub fn roll_shiny(roll: f64, shiny_mult: f64) -> bool {
    roll < BASE_SHINY_CHANCE * shiny_mult
}

/// Everything a catch needs besides randomness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchRequest {
    pub multipliers: ComposedMultipliers,
    pub reaction_time: f64,
    pub caught_at: i64,
    /// Forces a shiny regardless of the roll.
    pub force_shiny: bool,
}

/// Resolves one successful reel into a fish.
///
/// Always consumes exactly one tier, one species, and one shiny roll.
pub fn resolve_catch(rolls: &mut impl CatchRolls, request: &CatchRequest) -> CaughtFish {
    let m = &request.multipliers;
    let weights = biased_weights(&RARITY_WEIGHTS, m.rarity_mult, m.mythic_boost);
    let rarity = draw_tier(&weights, rolls.tier_roll());

    let pool = species_in_tier(rarity);
    let species = draw_species(&pool, rolls.species_roll(), m.void_mult);

    let is_shiny = roll_shiny(rolls.shiny_roll(), m.shiny_mult) || request.force_shiny;
    let value = if is_shiny {
        species.base_value * SHINY_VALUE_MULTIPLIER
    } else {
        species.base_value
    };

    CaughtFish {
        species,
        is_shiny,
        value,
        caught_at: request.caught_at,
        reaction_time: request.reaction_time,
    }
}
