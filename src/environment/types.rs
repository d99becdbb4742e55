//! Weather, time-of-day, and moon-phase enums with their modifier tables.

use serde::{Deserialize, Serialize};

/// Current weather over the water.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Fog,
    Storm,
    /// Ultra rare (2% per roll).
    Aurora,
}

/// Modifiers contributed by the weather.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherEffect {
    pub rarity_mult: f64,
    pub bite_speed_mult: f64,
    pub shiny_mult: f64,
}

impl Weather {
    pub const ALL: [Weather; 5] = [
        Weather::Clear,
        Weather::Rain,
        Weather::Fog,
        Weather::Storm,
        Weather::Aurora,
    ];

    /// Cumulative roll thresholds, checked in `ALL` order.
    /// Clear 50%, Rain 20%, Fog 15%, Storm 13%, Aurora 2%
    pub const CUMULATIVE_CHANCES: [f64; 5] = [0.50, 0.70, 0.85, 0.98, 1.0];

    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Fog => "fog",
            Weather::Storm => "storm",
            Weather::Aurora => "aurora",
        }
    }

    pub fn effect(self) -> WeatherEffect {
        let (rarity_mult, bite_speed_mult, shiny_mult) = match self {
            Weather::Clear => (1.0, 1.0, 1.0),
            Weather::Rain => (1.3, 0.8, 1.5),
            Weather::Fog => (1.5, 1.2, 1.2),
            Weather::Storm => (2.0, 0.6, 2.0),
            Weather::Aurora => (3.0, 1.0, 5.0),
        };
        WeatherEffect {
            rarity_mult,
            bite_speed_mult,
            shiny_mult,
        }
    }

    /// Maps a uniform roll in `[0, 1)` onto the weather table.
    pub fn from_roll(roll: f64) -> Weather {
        for (weather, threshold) in Weather::ALL.iter().zip(Weather::CUMULATIVE_CHANCES) {
            if roll < threshold {
                return *weather;
            }
        }
        Weather::Aurora
    }
}

/// Period of the day, derived from the wall-clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// 05:00-06:59
    Dawn,
    /// 07:00-17:59
    #[default]
    Day,
    /// 18:00-19:59
    Dusk,
    /// 20:00-04:59
    Night,
}

/// Modifiers contributed by the time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeEffect {
    pub rarity_mult: f64,
    /// Added to the mythic tier's sampling weight.
    pub mythic_boost: f64,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Dawn,
        TimeOfDay::Day,
        TimeOfDay::Dusk,
        TimeOfDay::Night,
    ];

    pub fn from_hour(hour: u32) -> TimeOfDay {
        match hour {
            5..=6 => TimeOfDay::Dawn,
            7..=17 => TimeOfDay::Day,
            18..=19 => TimeOfDay::Dusk,
            _ => TimeOfDay::Night,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimeOfDay::Dawn => "dawn",
            TimeOfDay::Day => "day",
            TimeOfDay::Dusk => "dusk",
            TimeOfDay::Night => "night",
        }
    }

    pub fn effect(self) -> TimeEffect {
        let (rarity_mult, mythic_boost) = match self {
            TimeOfDay::Dawn => (1.2, 0.01),
            TimeOfDay::Day => (1.0, 0.0),
            TimeOfDay::Dusk => (1.5, 0.02),
            TimeOfDay::Night => (1.8, 0.03),
        };
        TimeEffect {
            rarity_mult,
            mythic_boost,
        }
    }
}

/// Simplified lunar phase, derived from the day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoonPhase {
    /// Days 1-7
    New,
    /// Days 8-14
    #[default]
    Waxing,
    /// Days 15-21
    Full,
    /// Days 22-31
    Waning,
}

/// Modifiers contributed by the moon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEffect {
    pub shiny_mult: f64,
    /// Weight of void-touched species within their tier.
    pub void_mult: f64,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::Waxing,
        MoonPhase::Full,
        MoonPhase::Waning,
    ];

    /// Days 29-31 fold into the last phase.
    pub fn from_day_of_month(day: u32) -> MoonPhase {
        let index = (day.saturating_sub(1) / 7).min(3) as usize;
        MoonPhase::ALL[index]
    }

    pub fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::Waxing => "waxing",
            MoonPhase::Full => "full",
            MoonPhase::Waning => "waning",
        }
    }

    pub fn effect(self) -> MoonEffect {
        let (shiny_mult, void_mult) = match self {
            MoonPhase::New => (0.5, 2.0),
            MoonPhase::Waxing => (1.0, 1.0),
            MoonPhase::Full => (3.0, 1.0),
            MoonPhase::Waning => (1.0, 1.0),
        };
        MoonEffect {
            shiny_mult,
            void_mult,
        }
    }
}
