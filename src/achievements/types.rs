//! Achievement system types and runtime state.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};

use crate::core::constants::{seconds_to_ticks, ACHIEVEMENT_NOTIFICATION_SECONDS};
use crate::fishing::types::Rarity;

/// Achievement categories for grouping in menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementCategory {
    Catches,
    Collection,
    Shiny,
    Rarity,
    Wealth,
    Skill,
    Mastery,
}

impl AchievementCategory {
    /// All categories in display order.
    pub const ALL: [AchievementCategory; 7] = [
        AchievementCategory::Catches,
        AchievementCategory::Collection,
        AchievementCategory::Shiny,
        AchievementCategory::Rarity,
        AchievementCategory::Wealth,
        AchievementCategory::Skill,
        AchievementCategory::Mastery,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AchievementCategory::Catches => "Catches",
            AchievementCategory::Collection => "Collection",
            AchievementCategory::Shiny => "Shiny",
            AchievementCategory::Rarity => "Rarity",
            AchievementCategory::Wealth => "Wealth",
            AchievementCategory::Skill => "Skill",
            AchievementCategory::Mastery => "Mastery",
        }
    }
}

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    // Catch counts
    FirstCatch,        // 1 fish
    EarlyFisher,       // 10 fish
    ExperiencedAngler, // 50 fish
    MasterFisher,      // 100 fish
    LegendaryAngler,   // 500 fish
    // Collection
    Collector,
    PokemonMaster,
    PokedexComplete,
    // Shiny
    ShinyHunter,
    ShinyCollector,
    ShinyMaster,
    // Rarity
    UncommonHunter,
    RareCollector,
    EpicSeeker,
    LegendaryFinder,
    MythicChampion,
    // Wealth
    FirstFortune,
    Wealthy,
    Millionaire,
    // Skill
    PatientFisher,
    QuickReflexes,
    PerfectStreak,
    // Meta
    Completionist,
}

/// Typed unlock predicate, checked against an [`AchievementSnapshot`](super::logic::AchievementSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCondition {
    TotalCatches(u64),
    UniqueSpecies(u64),
    /// Every species caught at least once.
    CollectionComplete,
    /// Every species caught both normal and shiny.
    CollectionFullyComplete,
    TotalShinies(u64),
    /// Catches of `rarity` or any rarer tier.
    CatchesAtLeast { rarity: Rarity, count: u64 },
    LifetimeGold(u64),
    /// The triggering catch spent long enough on the line.
    PatientCatch,
    /// The triggering catch was reeled quickly.
    QuickCatch,
    CatchStreak(u32),
    /// Every other achievement is unlocked. Excludes itself by id.
    AllOthersUnlocked,
}

impl AchievementCondition {
    /// Numeric goal for conditions with visible progress.
    pub fn target(&self) -> Option<u64> {
        match *self {
            AchievementCondition::TotalCatches(n)
            | AchievementCondition::UniqueSpecies(n)
            | AchievementCondition::TotalShinies(n)
            | AchievementCondition::LifetimeGold(n) => Some(n),
            AchievementCondition::CatchesAtLeast { count, .. } => Some(count),
            AchievementCondition::CatchStreak(n) => Some(n as u64),
            _ => None,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub secret: bool,
    pub gold_reward: u64,
    pub condition: AchievementCondition,
}

/// Progress on a threshold achievement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AchievementProgress {
    pub current: u64,
    pub target: u64,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnlockedAchievement {
    /// Unix seconds.
    pub unlocked_at: i64,
    /// Gold granted at unlock.
    #[serde(default)]
    pub gold_reward: u64,
}

/// A time-boxed unlock banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementNotification {
    pub id: AchievementId,
    pub name: &'static str,
    pub gold_reward: u64,
    pub ticks_remaining: u32,
}

/// Achievement state (saved to disk).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Achievements {
    /// Map of unlocked achievements.
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
    /// Progress tracking for threshold achievements.
    pub progress: HashMap<AchievementId, AchievementProgress>,
    /// Total gold granted by achievements.
    pub total_gold_awarded: u64,
    /// Unlock banners waiting to expire. Not persisted.
    #[serde(skip)]
    pub notifications: VecDeque<AchievementNotification>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId, gold_reward: u64, unlocked_at: i64) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at,
                gold_reward,
            },
        );
        self.total_gold_awarded += gold_reward;
        true
    }

    pub fn update_progress(&mut self, id: AchievementId, current: u64, target: u64) {
        self.progress
            .insert(id, AchievementProgress { current, target });
    }

    pub fn get_progress(&self, id: AchievementId) -> Option<&AchievementProgress> {
        self.progress.get(&id)
    }

    pub fn total_count(&self) -> usize {
        use super::data::ALL_ACHIEVEMENTS;
        ALL_ACHIEVEMENTS.len()
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Unlock percentage (0.0 - 100.0).
    pub fn unlock_percentage(&self) -> f32 {
        let total = self.total_count();
        if total == 0 {
            return 0.0;
        }
        (self.unlocked_count() as f32 / total as f32) * 100.0
    }

    /// Unlocked/total by category.
    pub fn count_by_category(&self, category: AchievementCategory) -> (usize, usize) {
        use super::data::ALL_ACHIEVEMENTS;

        let in_category: Vec<_> = ALL_ACHIEVEMENTS
            .iter()
            .filter(|a| a.category == category)
            .collect();
        let unlocked = in_category
            .iter()
            .filter(|a| self.is_unlocked(a.id))
            .count();
        (unlocked, in_category.len())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn push_notification(&mut self, def: &AchievementDef) {
        self.notifications.push_back(AchievementNotification {
            id: def.id,
            name: def.name,
            gold_reward: def.gold_reward,
            ticks_remaining: seconds_to_ticks(ACHIEVEMENT_NOTIFICATION_SECONDS),
        });
    }

    /// Counts every banner down by one tick and drops the expired ones.
    pub fn tick_notifications(&mut self) {
        for n in self.notifications.iter_mut() {
            n.ticks_remaining = n.ticks_remaining.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ticks_remaining > 0);
    }

    /// The banner currently on screen, if any.
    pub fn current_notification(&self) -> Option<&AchievementNotification> {
        self.notifications.front()
    }
}
