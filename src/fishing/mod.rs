//! Fishing: species catalog, the encounter state machine, and catch resolution.

pub mod catalog;
pub mod encounter;
pub mod resolve;
pub mod types;

pub use catalog::{species_by_id, species_in_tier, RARITY_WEIGHTS, SPECIES};
pub use encounter::{CastOutcome, EncounterEvent, EncounterState, FishingEncounter, ReelTiming};
pub use resolve::{
    resolve_catch, CatchRequest, CatchRolls, ComposedMultipliers, FixedRolls, MultiplierBreakdown,
};
pub use types::{CatchContext, CaughtFish, Rarity, ReactionFlags, Species, Vec2, WaterRegion};
