//! Achievement system module.
//!
//! Achievements are checked after every catch against a typed snapshot and
//! pay their gold reward exactly once. Stored in `achievements.json`.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{
    get_achievement_def, get_achievements_by_category, validate_achievements, ALL_ACHIEVEMENTS,
};
pub use logic::{condition_met, AchievementSnapshot};
pub use types::{
    AchievementCategory, AchievementCondition, AchievementDef, AchievementId,
    AchievementNotification, AchievementProgress, Achievements, UnlockedAchievement,
};
