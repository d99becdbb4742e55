//! Slowly-growing character stats, hidden affinities, traits, and secrets.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    LUCK_SHINY_FACTOR, PATIENCE_BITE_FACTOR, PERCEPTION_RARITY_FACTOR, STAT_MAX,
};

/// Every numeric stat a character carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Luck,
    Patience,
    Technique,
    Perception,
    Endurance,
    WaterAffinity,
    MoonAffinity,
    VoidAffinity,
}

impl Stat {
    /// Stats shown to the player.
    pub const VISIBLE: [Stat; 5] = [
        Stat::Luck,
        Stat::Patience,
        Stat::Technique,
        Stat::Perception,
        Stat::Endurance,
    ];

    /// Affinities discovered through play.
    pub const HIDDEN: [Stat; 3] = [Stat::WaterAffinity, Stat::MoonAffinity, Stat::VoidAffinity];

    pub fn name(self) -> &'static str {
        match self {
            Stat::Luck => "Luck",
            Stat::Patience => "Patience",
            Stat::Technique => "Technique",
            Stat::Perception => "Perception",
            Stat::Endurance => "Endurance",
            Stat::WaterAffinity => "Water Affinity",
            Stat::MoonAffinity => "Moon Affinity",
            Stat::VoidAffinity => "Void Affinity",
        }
    }
}

/// Multipliers derived from the character's stats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatMultipliers {
    /// From perception.
    pub rarity_mult: f64,
    /// From luck.
    pub shiny_mult: f64,
    /// From patience. Below one means faster bites.
    pub bite_speed_mult: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    pub luck: f64,
    pub patience: f64,
    pub technique: f64,
    pub perception: f64,
    pub endurance: f64,
    pub water_affinity: f64,
    pub moon_affinity: f64,
    pub void_affinity: f64,
    /// Unlocked trait ids in unlock order.
    pub traits: Vec<String>,
    /// Discovered lore ids in discovery order.
    pub discovered_secrets: Vec<String>,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            luck: 10.0,
            patience: 10.0,
            technique: 10.0,
            perception: 10.0,
            endurance: 10.0,
            water_affinity: 0.0,
            moon_affinity: 0.0,
            void_affinity: 0.0,
            traits: Vec::new(),
            discovered_secrets: Vec::new(),
        }
    }
}

impl CharacterStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Luck => self.luck,
            Stat::Patience => self.patience,
            Stat::Technique => self.technique,
            Stat::Perception => self.perception,
            Stat::Endurance => self.endurance,
            Stat::WaterAffinity => self.water_affinity,
            Stat::MoonAffinity => self.moon_affinity,
            Stat::VoidAffinity => self.void_affinity,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Luck => &mut self.luck,
            Stat::Patience => &mut self.patience,
            Stat::Technique => &mut self.technique,
            Stat::Perception => &mut self.perception,
            Stat::Endurance => &mut self.endurance,
            Stat::WaterAffinity => &mut self.water_affinity,
            Stat::MoonAffinity => &mut self.moon_affinity,
            Stat::VoidAffinity => &mut self.void_affinity,
        }
    }

    /// Adds to a stat, clamped to `[0, STAT_MAX]`. Returns the new value.
    pub fn add_stat(&mut self, stat: Stat, amount: f64) -> f64 {
        let slot = self.slot(stat);
        *slot = clamp_stat(*slot + amount);
        *slot
    }

    /// Re-clamps every stat. Used after loading hand-edited or stale saves.
    pub fn normalize(&mut self) {
        for stat in Stat::VISIBLE.into_iter().chain(Stat::HIDDEN) {
            let slot = self.slot(stat);
            *slot = clamp_stat(*slot);
        }
    }

    /// Highest of the five visible stats.
    pub fn highest_visible(&self) -> f64 {
        Stat::VISIBLE
            .iter()
            .map(|s| self.get(*s))
            .fold(0.0, f64::max)
    }

    pub fn has_trait(&self, id: &str) -> bool {
        self.traits.iter().any(|t| t == id)
    }

    /// Returns true only when the trait was not already unlocked.
    pub fn unlock_trait(&mut self, id: &str) -> bool {
        if self.has_trait(id) {
            return false;
        }
        self.traits.push(id.to_string());
        true
    }

    pub fn has_secret(&self, id: &str) -> bool {
        self.discovered_secrets.iter().any(|s| s == id)
    }

    /// Returns true only when the secret was not already discovered.
    pub fn discover_secret(&mut self, id: &str) -> bool {
        if self.has_secret(id) {
            return false;
        }
        self.discovered_secrets.push(id.to_string());
        true
    }

    pub fn multipliers(&self) -> StatMultipliers {
        StatMultipliers {
            rarity_mult: 1.0 + (self.perception / STAT_MAX) * PERCEPTION_RARITY_FACTOR,
            shiny_mult: 1.0 + (self.luck / STAT_MAX) * LUCK_SHINY_FACTOR,
            bite_speed_mult: 1.0 - (self.patience / STAT_MAX) * PATIENCE_BITE_FACTOR,
        }
    }
}

fn clamp_stat(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, STAT_MAX)
}
