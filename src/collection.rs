//! Per-species catch counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fishing::catalog::SPECIES;
use crate::fishing::types::Rarity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchCounts {
    pub normal: u64,
    pub shiny: u64,
}

impl CatchCounts {
    pub fn total(&self) -> u64 {
        self.normal + self.shiny
    }
}

/// Caught vs. defined species for one tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierProgress {
    pub caught: usize,
    pub total: usize,
}

/// Catch counts for every species. Counts only ever grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    pub caught_fish: BTreeMap<String, CatchCounts>,
    pub total_catches: u64,
    pub total_shiny_caught: u64,
}

impl Default for Collection {
    fn default() -> Self {
        let mut collection = Self {
            caught_fish: BTreeMap::new(),
            total_catches: 0,
            total_shiny_caught: 0,
        };
        collection.seed_species();
        collection
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zero entry for any catalog species missing from the map.
    pub fn seed_species(&mut self) {
        for species in SPECIES {
            self.caught_fish.entry(species.id.to_string()).or_default();
        }
    }

    pub fn add_catch(&mut self, species_id: &str, is_shiny: bool) {
        let counts = self.caught_fish.entry(species_id.to_string()).or_default();
        if is_shiny {
            counts.shiny += 1;
            self.total_shiny_caught += 1;
        } else {
            counts.normal += 1;
        }
        self.total_catches += 1;
    }

    pub fn counts(&self, species_id: &str) -> CatchCounts {
        self.caught_fish.get(species_id).copied().unwrap_or_default()
    }

    /// Caught at least once, in either variant.
    pub fn has_caught(&self, species_id: &str) -> bool {
        self.counts(species_id).total() > 0
    }

    pub fn has_caught_shiny(&self, species_id: &str) -> bool {
        self.counts(species_id).shiny > 0
    }

    pub fn unique_species(&self) -> usize {
        SPECIES.iter().filter(|s| self.has_caught(s.id)).count()
    }

    pub fn unique_shiny_species(&self) -> usize {
        SPECIES.iter().filter(|s| self.has_caught_shiny(s.id)).count()
    }

    pub fn total_shinies(&self) -> u64 {
        self.total_shiny_caught
    }

    /// Every catalog species caught at least once.
    pub fn is_complete(&self) -> bool {
        SPECIES.iter().all(|s| self.has_caught(s.id))
    }

    /// Every catalog species caught both normal and shiny.
    pub fn is_fully_complete(&self) -> bool {
        SPECIES.iter().all(|s| {
            let c = self.counts(s.id);
            c.normal > 0 && c.shiny > 0
        })
    }

    pub fn completion_percentage(&self) -> f64 {
        if SPECIES.is_empty() {
            return 0.0;
        }
        self.unique_species() as f64 / SPECIES.len() as f64 * 100.0
    }

    pub fn shiny_completion_percentage(&self) -> f64 {
        if SPECIES.is_empty() {
            return 0.0;
        }
        self.unique_shiny_species() as f64 / SPECIES.len() as f64 * 100.0
    }

    /// Caught/total species per tier, indexed by `Rarity::index()`.
    pub fn rarity_stats(&self) -> [TierProgress; 6] {
        let mut stats = [TierProgress::default(); 6];
        for species in SPECIES {
            let slot = &mut stats[species.rarity.index()];
            slot.total += 1;
            if self.has_caught(species.id) {
                slot.caught += 1;
            }
        }
        stats
    }

    pub fn tier_progress(&self, rarity: Rarity) -> TierProgress {
        self.rarity_stats()[rarity.index()]
    }
}
