//! Achievement evaluation against a typed stats snapshot.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{AchievementCondition, AchievementDef, Achievements};
use crate::collection::Collection;
use crate::fishing::catalog::SPECIES;
use crate::fishing::types::{Rarity, ReactionFlags};
use crate::progression::Progression;
use crate::statistics::Statistics;

/// Everything an achievement predicate may look at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AchievementSnapshot {
    pub total_catches: u64,
    pub unique_species: u64,
    pub collection_complete: bool,
    pub collection_fully_complete: bool,
    pub total_shinies: u64,
    /// Catches of each tier or rarer, indexed by `Rarity::index()`.
    pub catches_at_least: [u64; 6],
    pub lifetime_gold: u64,
    pub current_streak: u32,
    /// Flags of the catch that triggered this evaluation.
    pub reaction: ReactionFlags,
}

impl AchievementSnapshot {
    pub fn capture(
        collection: &Collection,
        statistics: &Statistics,
        progression: &Progression,
        reaction: ReactionFlags,
    ) -> Self {
        let mut catches_at_least = [0; 6];
        for rarity in Rarity::ALL {
            catches_at_least[rarity.index()] = statistics.catches_at_least(rarity);
        }
        Self {
            total_catches: statistics.total_catches,
            unique_species: collection.unique_species() as u64,
            collection_complete: collection.is_complete(),
            collection_fully_complete: collection.is_fully_complete(),
            total_shinies: statistics.total_shinies,
            catches_at_least,
            lifetime_gold: progression.lifetime_gold,
            current_streak: statistics.current_streak,
            reaction,
        }
    }

    /// Current value for a threshold condition.
    pub fn current(&self, condition: &AchievementCondition) -> u64 {
        match *condition {
            AchievementCondition::TotalCatches(_) => self.total_catches,
            AchievementCondition::UniqueSpecies(_) => self.unique_species,
            AchievementCondition::TotalShinies(_) => self.total_shinies,
            AchievementCondition::CatchesAtLeast { rarity, .. } => {
                self.catches_at_least[rarity.index()]
            }
            AchievementCondition::LifetimeGold(_) => self.lifetime_gold,
            AchievementCondition::CatchStreak(_) => self.current_streak as u64,
            AchievementCondition::CollectionComplete => {
                if self.collection_complete {
                    SPECIES.len() as u64
                } else {
                    self.unique_species
                }
            }
            _ => 0,
        }
    }
}

/// Whether `def`'s condition holds. `AllOthersUnlocked` reads the unlock map.
pub fn condition_met(
    def: &AchievementDef,
    snapshot: &AchievementSnapshot,
    achievements: &Achievements,
) -> bool {
    match def.condition {
        AchievementCondition::TotalCatches(n) => snapshot.total_catches >= n,
        AchievementCondition::UniqueSpecies(n) => snapshot.unique_species >= n,
        AchievementCondition::CollectionComplete => snapshot.collection_complete,
        AchievementCondition::CollectionFullyComplete => snapshot.collection_fully_complete,
        AchievementCondition::TotalShinies(n) => snapshot.total_shinies >= n,
        AchievementCondition::CatchesAtLeast { rarity, count } => {
            snapshot.catches_at_least[rarity.index()] >= count
        }
        AchievementCondition::LifetimeGold(n) => snapshot.lifetime_gold >= n,
        AchievementCondition::PatientCatch => snapshot.reaction.patient_catch,
        AchievementCondition::QuickCatch => snapshot.reaction.quick_catch,
        AchievementCondition::CatchStreak(n) => snapshot.current_streak >= n,
        AchievementCondition::AllOthersUnlocked => ALL_ACHIEVEMENTS
            .iter()
            .filter(|other| other.id != def.id)
            .all(|other| achievements.is_unlocked(other.id)),
    }
}

impl Achievements {
    /// Checks every locked achievement against the snapshot.
    ///
    /// Each achievement unlocks at most once across any number of calls. The
    /// returned definitions are exactly the ones that unlocked in this call,
    /// so the caller grants their gold once. Meta achievements are checked
    /// after everything else in the same pass.
    pub fn evaluate(
        &mut self,
        snapshot: &AchievementSnapshot,
        now: i64,
    ) -> Vec<&'static AchievementDef> {
        let mut newly_unlocked = Vec::new();

        let (meta, regular): (Vec<_>, Vec<_>) = ALL_ACHIEVEMENTS
            .iter()
            .partition(|d| d.condition == AchievementCondition::AllOthersUnlocked);

        for def in regular.into_iter().chain(meta) {
            if let Some(target) = def.condition.target() {
                let current = if self.is_unlocked(def.id) {
                    target
                } else {
                    snapshot.current(&def.condition).min(target)
                };
                self.update_progress(def.id, current, target);
            }
            if self.is_unlocked(def.id) || !condition_met(def, snapshot, self) {
                continue;
            }
            if self.unlock(def.id, def.gold_reward, now) {
                tracing::info!(
                    achievement = def.name,
                    gold = def.gold_reward,
                    "achievement unlocked"
                );
                self.push_notification(def);
                newly_unlocked.push(def);
            }
        }

        newly_unlocked
    }
}
