//! Weather, time of day, and moon phase.

pub mod logic;
pub mod types;

pub use logic::{roll_weather, EnvironmentMultipliers, EnvironmentState, WeatherChange};
pub use types::{MoonEffect, MoonPhase, TimeEffect, TimeOfDay, Weather, WeatherEffect};
