//! Level curve, gold ledger, and rod ownership.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::rods::{rod_by_id, starter_rod, Rod, STARTER_ROD_ID};
use crate::core::constants::{
    LEVEL_CURVE_FACTOR, SHINY_EXP_MULTIPLIER, STARTING_EXP_TO_NEXT_LEVEL,
};
use crate::error::PurchaseError;
use crate::fishing::types::Rarity;

/// Base experience for a catch of each tier, indexed by `Rarity::index()`.
pub const BASE_EXP_BY_RARITY: [u64; 6] = [5, 15, 30, 60, 120, 250];

/// Experience awarded for a catch. Shinies are worth double.
pub fn exp_for_fish(rarity: Rarity, is_shiny: bool) -> u64 {
    let base = BASE_EXP_BY_RARITY[rarity.index()];
    if is_shiny {
        base * SHINY_EXP_MULTIPLIER
    } else {
        base
    }
}

/// Threshold for the level after one with `prev` as its threshold.
///
/// Floored in floating point, so 100 becomes 114 (`100.0 * 1.15` is just
/// under 115).
pub fn next_threshold(prev: u64) -> u64 {
    ((prev as f64 * LEVEL_CURVE_FACTOR).floor() as u64).max(1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Progression {
    /// Experience toward the next level. Always below the threshold.
    pub experience: u64,
    pub level: u32,
    pub experience_to_next_level: u64,
    pub total_experience_earned: u64,
    pub highest_level_reached: u32,
    /// Spendable gold.
    pub gold: u64,
    /// Every coin ever earned; spending never lowers it.
    pub lifetime_gold: u64,
    pub owned_rods: Vec<String>,
    pub equipped_rod: String,
}

impl Default for Progression {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
            experience_to_next_level: STARTING_EXP_TO_NEXT_LEVEL,
            total_experience_earned: 0,
            highest_level_reached: 1,
            gold: 0,
            lifetime_gold: 0,
            owned_rods: vec![STARTER_ROD_ID.to_string()],
            equipped_rod: STARTER_ROD_ID.to_string(),
        }
    }
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds experience and levels up as many times as it covers.
    ///
    /// Returns each level reached, in order. The remainder carries over.
    pub fn add_experience(&mut self, amount: u64) -> Vec<u32> {
        self.experience += amount;
        self.total_experience_earned += amount;

        let mut reached = Vec::new();
        while self.experience >= self.experience_to_next_level {
            self.experience -= self.experience_to_next_level;
            self.level += 1;
            self.highest_level_reached = self.highest_level_reached.max(self.level);
            self.experience_to_next_level = next_threshold(self.experience_to_next_level);
            reached.push(self.level);
        }
        if let Some(&level) = reached.last() {
            tracing::info!(level, "level up");
        }
        reached
    }

    /// Credits earned gold to both the wallet and the lifetime total.
    pub fn add_gold(&mut self, amount: u64) {
        self.gold += amount;
        self.lifetime_gold += amount;
    }

    pub fn owns_rod(&self, id: &str) -> bool {
        self.owned_rods.iter().any(|r| r == id)
    }

    /// The equipped rod's catalog entry.
    pub fn equipped(&self) -> &'static Rod {
        rod_by_id(&self.equipped_rod).unwrap_or_else(starter_rod)
    }

    pub fn can_purchase_rod(&self, id: &str) -> bool {
        match rod_by_id(id) {
            Some(rod) => !self.owns_rod(id) && self.level >= rod.level_req,
            None => false,
        }
    }

    /// Buys a rod, returning the gold spent.
    pub fn purchase_rod(&mut self, id: &str) -> Result<u64, PurchaseError> {
        let rod = rod_by_id(id).ok_or_else(|| PurchaseError::UnknownRod(id.to_string()))?;
        if self.owns_rod(id) {
            return Err(PurchaseError::AlreadyOwned(id.to_string()));
        }
        if self.level < rod.level_req {
            return Err(PurchaseError::LevelTooLow {
                required: rod.level_req,
                current: self.level,
            });
        }
        if self.gold < rod.cost {
            return Err(PurchaseError::NotEnoughGold {
                cost: rod.cost,
                available: self.gold,
            });
        }
        self.gold -= rod.cost;
        self.owned_rods.push(rod.id.to_string());
        tracing::info!(rod = rod.id, cost = rod.cost, "rod purchased");
        Ok(rod.cost)
    }

    /// Equips an owned rod. Unknown or unowned rods are refused.
    pub fn equip_rod(&mut self, id: &str) -> bool {
        if rod_by_id(id).is_none() || !self.owns_rod(id) {
            return false;
        }
        self.equipped_rod = id.to_string();
        true
    }

    /// Repairs a loaded record so the starter rod is owned, the equipped rod
    /// is owned and known, and the level curve is usable.
    pub fn normalize(&mut self) {
        let mut seen = HashSet::new();
        self.owned_rods
            .retain(|id| rod_by_id(id).is_some() && seen.insert(id.clone()));
        if !self.owns_rod(STARTER_ROD_ID) {
            self.owned_rods.insert(0, STARTER_ROD_ID.to_string());
        }
        if rod_by_id(&self.equipped_rod).is_none() || !self.owns_rod(&self.equipped_rod) {
            self.equipped_rod = STARTER_ROD_ID.to_string();
        }
        self.level = self.level.max(1);
        self.highest_level_reached = self.highest_level_reached.max(self.level);
        self.experience_to_next_level = self.experience_to_next_level.max(1);
        self.lifetime_gold = self.lifetime_gold.max(self.gold);
    }
}
