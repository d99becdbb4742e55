//! Character stats, hidden traits, and lore.

pub mod data;
pub mod stats;

pub use data::{lore_by_id, trait_by_id, LoreEntry, TraitCondition, TraitDef, HIDDEN_TRAITS, LORE};
pub use stats::{CharacterStats, Stat, StatMultipliers};
