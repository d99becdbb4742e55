//! Environment state: stochastic weather plus clock-derived time and moon.

use chrono::{Datelike, NaiveDateTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{MoonPhase, TimeOfDay, Weather};
use crate::character::{CharacterStats, StatMultipliers};
use crate::core::constants::WEATHER_CHANGE_TICKS;

/// Environment and character-stat multipliers, before the rod is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentMultipliers {
    /// weather x time of day x perception
    pub rarity_mult: f64,
    /// weather x moon x luck
    pub shiny_mult: f64,
    /// weather x patience
    pub bite_speed_mult: f64,
    /// Additive bonus to the mythic tier weight.
    pub mythic_boost: f64,
    /// Weight of void-touched species within their tier.
    pub void_mult: f64,
}

/// A weather roll that landed on a different weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherChange {
    pub from: Weather,
    pub to: Weather,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    pub weather: Weather,
    /// Ticks since the last weather roll.
    pub weather_timer: u64,
    /// Cached from the clock on every tick.
    pub time_of_day: TimeOfDay,
    /// Cached from the clock on every tick.
    pub moon_phase: MoonPhase,
}

impl EnvironmentState {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            weather: Weather::Clear,
            weather_timer: 0,
            time_of_day: TimeOfDay::from_hour(now.hour()),
            moon_phase: MoonPhase::from_day_of_month(now.day()),
        }
    }

    /// Advances the weather timer and refreshes the clock-derived fields.
    ///
    /// `now` is sampled once by the caller per tick, so every reader within
    /// the tick sees the same time of day and moon phase.
    pub fn tick(&mut self, now: NaiveDateTime, rng: &mut impl Rng) -> Option<WeatherChange> {
        self.sync_clock(now);

        self.weather_timer += 1;
        if self.weather_timer < WEATHER_CHANGE_TICKS {
            return None;
        }
        self.weather_timer = 0;

        let from = self.weather;
        self.weather = roll_weather(rng);
        if self.weather == from {
            return None;
        }
        tracing::debug!(from = from.name(), to = self.weather.name(), "weather changed");
        Some(WeatherChange {
            from,
            to: self.weather,
        })
    }

    pub fn sync_clock(&mut self, now: NaiveDateTime) {
        self.time_of_day = TimeOfDay::from_hour(now.hour());
        self.moon_phase = MoonPhase::from_day_of_month(now.day());
    }

    /// Combines weather, time of day, moon phase, and character stats.
    pub fn get_environment_multipliers(&self, stats: &CharacterStats) -> EnvironmentMultipliers {
        let weather = self.weather.effect();
        let time = self.time_of_day.effect();
        let moon = self.moon_phase.effect();
        let StatMultipliers {
            rarity_mult,
            shiny_mult,
            bite_speed_mult,
        } = stats.multipliers();

        EnvironmentMultipliers {
            rarity_mult: weather.rarity_mult * time.rarity_mult * rarity_mult,
            shiny_mult: weather.shiny_mult * moon.shiny_mult * shiny_mult,
            bite_speed_mult: weather.bite_speed_mult * bite_speed_mult,
            mythic_boost: time.mythic_boost,
            void_mult: moon.void_mult,
        }
    }
}

/// Rolls the next weather from the cumulative probability table.
pub fn roll_weather(rng: &mut impl Rng) -> Weather {
    Weather::from_roll(rng.gen::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_derives_clock_fields() {
        let env = EnvironmentState::new(at(16, 21));
        assert_eq!(env.weather, Weather::Clear);
        assert_eq!(env.time_of_day, TimeOfDay::Night);
        assert_eq!(env.moon_phase, MoonPhase::Full);
    }

    #[test]
    fn test_weather_only_rolls_on_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut env = EnvironmentState::new(at(10, 12));
        for _ in 0..WEATHER_CHANGE_TICKS - 1 {
            assert!(env.tick(at(10, 12), &mut rng).is_none());
        }
        assert_eq!(env.weather, Weather::Clear);
        assert_eq!(env.weather_timer, WEATHER_CHANGE_TICKS - 1);
        env.tick(at(10, 12), &mut rng);
        assert_eq!(env.weather_timer, 0);
    }

    #[test]
    fn test_tick_refreshes_time_and_moon() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut env = EnvironmentState::new(at(3, 12));
        env.tick(at(20, 19), &mut rng);
        assert_eq!(env.time_of_day, TimeOfDay::Dusk);
        assert_eq!(env.moon_phase, MoonPhase::Full);
    }

    #[test]
    fn test_weather_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let n = 100_000;
        let mut aurora = 0;
        let mut clear = 0;
        for _ in 0..n {
            match roll_weather(&mut rng) {
                Weather::Aurora => aurora += 1,
                Weather::Clear => clear += 1,
                _ => {}
            }
        }
        let aurora_rate = aurora as f64 / n as f64;
        let clear_rate = clear as f64 / n as f64;
        assert!((aurora_rate - 0.02).abs() < 0.003, "aurora {}", aurora_rate);
        assert!((clear_rate - 0.50).abs() < 0.01, "clear {}", clear_rate);
    }

    #[test]
    fn test_storm_multipliers_with_baseline_stats() {
        let mut env = EnvironmentState::new(at(10, 12));
        env.weather = Weather::Storm;
        let m = env.get_environment_multipliers(&CharacterStats::default());
        // Day, waxing moon
        assert!((m.rarity_mult - 2.0 * 1.0 * 1.05).abs() < 1e-9);
        assert!((m.shiny_mult - 2.0 * 1.0 * 1.10).abs() < 1e-9);
        assert!((m.bite_speed_mult - 0.6 * 0.97).abs() < 1e-9);
        assert_eq!(m.mythic_boost, 0.0);
        assert_eq!(m.void_mult, 1.0);
    }

    #[test]
    fn test_night_new_moon_multipliers() {
        let env = EnvironmentState::new(at(2, 23));
        let m = env.get_environment_multipliers(&CharacterStats::default());
        assert!((m.rarity_mult - 1.8 * 1.05).abs() < 1e-9);
        assert!((m.shiny_mult - 0.5 * 1.10).abs() < 1e-9);
        assert_eq!(m.mythic_boost, 0.03);
        assert_eq!(m.void_mult, 2.0);
    }
}
