//! Startup configuration errors and refused player actions.
//!
//! A malformed catalog aborts session construction. Persistence failures are
//! recovered locally and invalid transitions are ignored, so neither has a type here.

use thiserror::Error;

use crate::fishing::types::Rarity;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("rarity weights sum to {sum}, expected 1.0")]
    WeightsDoNotSumToOne { sum: f64 },

    #[error("rarity weight for {rarity} is invalid: {weight}")]
    NegativeWeight { rarity: Rarity, weight: f64 },

    #[error("no species defined for the {0} tier")]
    EmptyTier(Rarity),

    #[error("species id `{0}` is defined more than once")]
    DuplicateSpecies(String),

    #[error("species `{0}` has a base value of zero")]
    ZeroBaseValue(String),

    #[error("rod id `{0}` is defined more than once")]
    DuplicateRod(String),

    #[error("no free level-1 starter rod in the rod catalog")]
    MissingStarterRod,

    #[error("achievement catalog is empty")]
    NoAchievements,
}

/// Why a rod purchase was refused. Nothing is deducted on error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("no rod with id `{0}`")]
    UnknownRod(String),

    #[error("rod `{0}` is already owned")]
    AlreadyOwned(String),

    #[error("level {required} required, currently level {current}")]
    LevelTooLow { required: u32, current: u32 },

    #[error("costs {cost} gold, only {available} available")]
    NotEnoughGold { cost: u64, available: u64 },
}
