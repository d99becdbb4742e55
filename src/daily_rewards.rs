//! Daily login streaks and the once-per-day reward.
//!
//! Logging in on consecutive days grows a streak multiplier on the base
//! reward. Exact streak milestones add a flat bonus on top.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DAILY_BASE_EXP, DAILY_BASE_GOLD, DAILY_STREAK_CAP_PERCENT, DAILY_STREAK_STEP_PERCENT,
};

/// Flat (gold, exp) bonus granted when the streak lands exactly on a milestone.
pub const STREAK_MILESTONES: &[(u32, u64, u64)] = &[
    (7, 200, 100),
    (30, 1000, 500),
    (100, 5000, 2500),
];

/// Login streak state (saved to disk).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DailyRewards {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_login_date: Option<NaiveDate>,
    pub total_logins: u64,
    pub rewards_claimed_today: bool,
    pub today_reward_gold: u64,
    pub today_reward_exp: u64,
}

impl DailyRewards {
    /// Registers a login on `today`. Returns true if this is the first login
    /// of the day, which makes a fresh reward available.
    pub fn check_daily_login(&mut self, today: NaiveDate) -> bool {
        match self.last_login_date {
            Some(last) if last == today => return false,
            Some(last) if last.succ_opt() == Some(today) => {
                self.current_streak += 1;
            }
            _ => self.current_streak = 1,
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_login_date = Some(today);
        self.total_logins += 1;
        self.rewards_claimed_today = false;

        let (gold, exp) = Self::calculate_reward(self.current_streak);
        self.today_reward_gold = gold;
        self.today_reward_exp = exp;

        tracing::info!(
            streak = self.current_streak,
            gold,
            exp,
            "daily login"
        );
        true
    }

    /// (gold, exp) for a given streak length.
    pub fn calculate_reward(streak: u32) -> (u64, u64) {
        let percent = streak_multiplier_percent(streak);
        let mut gold = DAILY_BASE_GOLD * percent / 100;
        let mut exp = DAILY_BASE_EXP * percent / 100;
        if let Some(&(_, bonus_gold, bonus_exp)) =
            STREAK_MILESTONES.iter().find(|(day, _, _)| *day == streak)
        {
            gold += bonus_gold;
            exp += bonus_exp;
        }
        (gold, exp)
    }

    /// Takes today's reward. Returns `None` once it has been claimed.
    pub fn claim_daily_reward(&mut self) -> Option<(u64, u64)> {
        if !self.has_unclaimed_reward() {
            return None;
        }
        self.rewards_claimed_today = true;
        Some((self.today_reward_gold, self.today_reward_exp))
    }

    pub fn has_unclaimed_reward(&self) -> bool {
        self.last_login_date.is_some() && !self.rewards_claimed_today
    }

    /// Days until the next milestone bonus, if any remain.
    pub fn days_to_next_milestone(&self) -> Option<u32> {
        STREAK_MILESTONES
            .iter()
            .map(|(day, _, _)| *day)
            .find(|day| *day > self.current_streak)
            .map(|day| day - self.current_streak)
    }
}

/// Reward multiplier in percent, capped at double.
pub fn streak_multiplier_percent(streak: u32) -> u64 {
    let extra_days = streak.saturating_sub(1) as u64;
    (100 + extra_days * DAILY_STREAK_STEP_PERCENT).min(DAILY_STREAK_CAP_PERCENT)
}
