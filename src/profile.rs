//! The bundle of every persisted record for one player.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::achievements::Achievements;
use crate::character::CharacterStats;
use crate::collection::Collection;
use crate::daily_rewards::DailyRewards;
use crate::progression::Progression;
use crate::statistics::Statistics;
use crate::utils::persistence::{load_json_or_default, save_json};

pub const COLLECTION_FILE: &str = "collection.json";
pub const STATISTICS_FILE: &str = "statistics.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const PROGRESSION_FILE: &str = "progression.json";
pub const CHARACTER_FILE: &str = "character_stats.json";
pub const DAILY_REWARDS_FILE: &str = "daily_rewards.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub collection: Collection,
    pub statistics: Statistics,
    pub achievements: Achievements,
    pub progression: Progression,
    pub character: CharacterStats,
    pub daily: DailyRewards,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads every record from `dir`. Missing or corrupt files fall back to
    /// defaults independently of each other.
    pub fn load(dir: &Path) -> Self {
        let mut profile = Self {
            collection: load_json_or_default(dir, COLLECTION_FILE),
            statistics: load_json_or_default(dir, STATISTICS_FILE),
            achievements: load_json_or_default(dir, ACHIEVEMENTS_FILE),
            progression: load_json_or_default(dir, PROGRESSION_FILE),
            character: load_json_or_default(dir, CHARACTER_FILE),
            daily: load_json_or_default(dir, DAILY_REWARDS_FILE),
        };
        profile.normalize();
        tracing::info!(
            dir = %dir.display(),
            level = profile.progression.level,
            catches = profile.statistics.total_catches,
            "profile loaded"
        );
        profile
    }

    /// Repairs records loaded from older or hand-edited saves.
    pub fn normalize(&mut self) {
        self.collection.seed_species();
        self.progression.normalize();
        self.character.normalize();
    }

    /// Writes every record. Stops at the first failure.
    pub fn save(&self, dir: &Path) -> io::Result<()> {
        save_json(dir, COLLECTION_FILE, &self.collection)?;
        save_json(dir, STATISTICS_FILE, &self.statistics)?;
        save_json(dir, ACHIEVEMENTS_FILE, &self.achievements)?;
        save_json(dir, PROGRESSION_FILE, &self.progression)?;
        save_json(dir, CHARACTER_FILE, &self.character)?;
        save_json(dir, DAILY_REWARDS_FILE, &self.daily)?;
        Ok(())
    }

    /// Saves, logging a failure instead of returning it.
    pub fn save_or_warn(&self, dir: &Path) {
        if let Err(e) = self.save(dir) {
            tracing::warn!(dir = %dir.display(), error = %e, "failed to save profile");
        }
    }
}
