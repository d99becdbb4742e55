//! Static achievement definitions.

use super::types::{AchievementCategory, AchievementCondition, AchievementDef, AchievementId};
use crate::error::CatalogError;
use crate::fishing::types::Rarity;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // CATCHES
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstCatch,
        name: "First Catch",
        description: "Catch your first fish",
        category: AchievementCategory::Catches,
        secret: false,
        gold_reward: 50,
        condition: AchievementCondition::TotalCatches(1),
    },
    AchievementDef {
        id: AchievementId::EarlyFisher,
        name: "Early Fisher",
        description: "Catch 10 fish",
        category: AchievementCategory::Catches,
        secret: false,
        gold_reward: 100,
        condition: AchievementCondition::TotalCatches(10),
    },
    AchievementDef {
        id: AchievementId::ExperiencedAngler,
        name: "Experienced Angler",
        description: "Catch 50 fish",
        category: AchievementCategory::Catches,
        secret: false,
        gold_reward: 250,
        condition: AchievementCondition::TotalCatches(50),
    },
    AchievementDef {
        id: AchievementId::MasterFisher,
        name: "Master Fisher",
        description: "Catch 100 fish",
        category: AchievementCategory::Catches,
        secret: false,
        gold_reward: 500,
        condition: AchievementCondition::TotalCatches(100),
    },
    AchievementDef {
        id: AchievementId::LegendaryAngler,
        name: "Legendary Angler",
        description: "Catch 500 fish",
        category: AchievementCategory::Catches,
        secret: false,
        gold_reward: 2000,
        condition: AchievementCondition::TotalCatches(500),
    },
    // ═══════════════════════════════════════════════════════════════
    // COLLECTION
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Collector,
        name: "Collector",
        description: "Catch 5 different species",
        category: AchievementCategory::Collection,
        secret: false,
        gold_reward: 150,
        condition: AchievementCondition::UniqueSpecies(5),
    },
    AchievementDef {
        id: AchievementId::PokemonMaster,
        name: "Gotta Catch 'Em All",
        description: "Catch every species",
        category: AchievementCategory::Collection,
        secret: false,
        gold_reward: 5000,
        condition: AchievementCondition::CollectionComplete,
    },
    AchievementDef {
        id: AchievementId::PokedexComplete,
        name: "Complete Logbook",
        description: "Catch every species in both normal and shiny form",
        category: AchievementCategory::Collection,
        secret: false,
        gold_reward: 10000,
        condition: AchievementCondition::CollectionFullyComplete,
    },
    // ═══════════════════════════════════════════════════════════════
    // SHINY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::ShinyHunter,
        name: "Shiny Hunter",
        description: "Catch your first shiny fish",
        category: AchievementCategory::Shiny,
        secret: false,
        gold_reward: 200,
        condition: AchievementCondition::TotalShinies(1),
    },
    AchievementDef {
        id: AchievementId::ShinyCollector,
        name: "Shiny Collector",
        description: "Catch 10 shiny fish",
        category: AchievementCategory::Shiny,
        secret: false,
        gold_reward: 1000,
        condition: AchievementCondition::TotalShinies(10),
    },
    AchievementDef {
        id: AchievementId::ShinyMaster,
        name: "Shiny Master",
        description: "Catch 50 shiny fish",
        category: AchievementCategory::Shiny,
        secret: false,
        gold_reward: 5000,
        condition: AchievementCondition::TotalShinies(50),
    },
    // ═══════════════════════════════════════════════════════════════
    // RARITY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::UncommonHunter,
        name: "Uncommon Hunter",
        description: "Catch 10 uncommon or rarer fish",
        category: AchievementCategory::Rarity,
        secret: false,
        gold_reward: 200,
        condition: AchievementCondition::CatchesAtLeast {
            rarity: Rarity::Uncommon,
            count: 10,
        },
    },
    AchievementDef {
        id: AchievementId::RareCollector,
        name: "Rare Collector",
        description: "Catch 10 rare or rarer fish",
        category: AchievementCategory::Rarity,
        secret: false,
        gold_reward: 400,
        condition: AchievementCondition::CatchesAtLeast {
            rarity: Rarity::Rare,
            count: 10,
        },
    },
    AchievementDef {
        id: AchievementId::EpicSeeker,
        name: "Epic Seeker",
        description: "Catch 5 epic or rarer fish",
        category: AchievementCategory::Rarity,
        secret: false,
        gold_reward: 800,
        condition: AchievementCondition::CatchesAtLeast {
            rarity: Rarity::Epic,
            count: 5,
        },
    },
    AchievementDef {
        id: AchievementId::LegendaryFinder,
        name: "Legendary Finder",
        description: "Catch a legendary or mythic fish",
        category: AchievementCategory::Rarity,
        secret: false,
        gold_reward: 1000,
        condition: AchievementCondition::CatchesAtLeast {
            rarity: Rarity::Legendary,
            count: 1,
        },
    },
    AchievementDef {
        id: AchievementId::MythicChampion,
        name: "Mythic Champion",
        description: "Catch a mythic fish",
        category: AchievementCategory::Rarity,
        secret: false,
        gold_reward: 3000,
        condition: AchievementCondition::CatchesAtLeast {
            rarity: Rarity::Mythic,
            count: 1,
        },
    },
    // ═══════════════════════════════════════════════════════════════
    // WEALTH
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::FirstFortune,
        name: "First Fortune",
        description: "Earn 1,000 gold",
        category: AchievementCategory::Wealth,
        secret: false,
        gold_reward: 100,
        condition: AchievementCondition::LifetimeGold(1_000),
    },
    AchievementDef {
        id: AchievementId::Wealthy,
        name: "Wealthy",
        description: "Earn 10,000 gold",
        category: AchievementCategory::Wealth,
        secret: false,
        gold_reward: 500,
        condition: AchievementCondition::LifetimeGold(10_000),
    },
    AchievementDef {
        id: AchievementId::Millionaire,
        name: "Tycoon",
        description: "Earn 100,000 gold",
        category: AchievementCategory::Wealth,
        secret: false,
        gold_reward: 5000,
        condition: AchievementCondition::LifetimeGold(100_000),
    },
    // ═══════════════════════════════════════════════════════════════
    // SKILL
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::PatientFisher,
        name: "Patient Fisher",
        description: "Land a fish after a long wait on the line",
        category: AchievementCategory::Skill,
        secret: false,
        gold_reward: 100,
        condition: AchievementCondition::PatientCatch,
    },
    AchievementDef {
        id: AchievementId::QuickReflexes,
        name: "Quick Reflexes",
        description: "Reel in a fish within half a second of the bite",
        category: AchievementCategory::Skill,
        secret: false,
        gold_reward: 150,
        condition: AchievementCondition::QuickCatch,
    },
    AchievementDef {
        id: AchievementId::PerfectStreak,
        name: "Perfect Streak",
        description: "Catch 10 fish in a row without one escaping",
        category: AchievementCategory::Skill,
        secret: false,
        gold_reward: 500,
        condition: AchievementCondition::CatchStreak(10),
    },
    // ═══════════════════════════════════════════════════════════════
    // MASTERY
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Completionist,
        name: "Completionist",
        description: "Unlock every other achievement",
        category: AchievementCategory::Mastery,
        secret: true,
        gold_reward: 20000,
        condition: AchievementCondition::AllOthersUnlocked,
    },
];

/// Get an achievement definition by ID.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Get achievements filtered by category.
pub fn get_achievements_by_category(category: AchievementCategory) -> Vec<&'static AchievementDef> {
    ALL_ACHIEVEMENTS
        .iter()
        .filter(|a| a.category == category)
        .collect()
}

/// Checks the catalog is non-empty.
pub fn validate_achievements(defs: &[AchievementDef]) -> Result<(), CatalogError> {
    if defs.is_empty() {
        return Err(CatalogError::NoAchievements);
    }
    Ok(())
}
