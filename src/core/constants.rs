// Tick and timing
pub const TICKS_PER_SECOND: u32 = 60;

// Encounter timing (in ticks)
pub const CAST_ANIMATION_TICKS: u32 = 30; // 0.5s line-out animation
pub const BITE_DEADLINE_MIN_TICKS: u32 = 120; // 2.0s fastest unmodified bite
pub const BITE_DEADLINE_MAX_TICKS: u32 = 480; // 8.0s slowest unmodified bite
pub const BITE_DEADLINE_FLOOR_TICKS: u32 = 10; // never bite faster than this
pub const REACTION_WINDOW_TICKS: u32 = 90; // 1.5s to react once the fish bites
pub const FAILED_DISPLAY_TICKS: u32 = 60; // 1.0s "it got away" before idle

// Bobber placement
pub const BOBBER_MIN_DISTANCE: f32 = 120.0;
pub const BOBBER_MAX_DISTANCE: f32 = 360.0;
pub const BOBBER_MAX_SIDEWAYS: f32 = 160.0;

// Shoreline and water surface (world units)
pub const SHORE_MIN_X: f32 = 40.0;
pub const SHORE_MAX_X: f32 = 1880.0;
pub const SHORE_Y: f32 = 860.0;
pub const WATER_MIN_X: f32 = 0.0;
pub const WATER_MAX_X: f32 = 1920.0;
pub const WATER_MIN_Y: f32 = 120.0;
pub const WATER_MAX_Y: f32 = 760.0;

// Catch resolution
pub const BASE_SHINY_CHANCE: f64 = 0.01;
pub const SHINY_VALUE_MULTIPLIER: u64 = 2;
pub const SHINY_EXP_MULTIPLIER: u64 = 2;

// Reaction-time flags (seconds)
pub const QUICK_CATCH_SECONDS: f64 = 0.5;
pub const PERFECT_CAST_SECONDS: f64 = 0.3;
pub const PATIENT_CATCH_TICKS: u32 = 180; // 3s of total line time

// Catch pacing (hidden traits)
pub const CATCH_BURST_SIZE: usize = 10; // catches timed together for a burst

// Weather
pub const WEATHER_CHANGE_TICKS: u64 = 5 * 60 * TICKS_PER_SECOND as u64; // every 5 minutes

// Character stat influence on multipliers
pub const STAT_MAX: f64 = 100.0;
pub const PERCEPTION_RARITY_FACTOR: f64 = 0.5;
pub const LUCK_SHINY_FACTOR: f64 = 1.0;
pub const PATIENCE_BITE_FACTOR: f64 = 0.3;

// Character stat nudges per catch
pub const LUCK_GAIN_SHINY: f64 = 0.1;
pub const LUCK_GAIN_NORMAL: f64 = 0.05;
pub const PATIENCE_GAIN_PER_CATCH: f64 = 0.05;
pub const PERCEPTION_GAIN_LEGENDARY_PLUS: f64 = 0.2;

// Leveling
pub const STARTING_EXP_TO_NEXT_LEVEL: u64 = 100;
pub const LEVEL_CURVE_FACTOR: f64 = 1.15; // threshold grows x1.15 per level, floored

// Notifications (seconds)
pub const ACHIEVEMENT_NOTIFICATION_SECONDS: u32 = 4;
pub const LEVEL_UP_NOTIFICATION_SECONDS: u32 = 3;

// Daily rewards
pub const DAILY_BASE_GOLD: u64 = 50;
pub const DAILY_BASE_EXP: u64 = 25;
pub const DAILY_STREAK_STEP_PERCENT: u64 = 15; // +15% per consecutive day
pub const DAILY_STREAK_CAP_PERCENT: u64 = 200;

/// Converts seconds to whole game ticks.
pub const fn seconds_to_ticks(seconds: u32) -> u32 {
    seconds * TICKS_PER_SECOND
}

/// Converts a tick count to seconds.
pub fn ticks_to_seconds(ticks: u32) -> f64 {
    ticks as f64 / TICKS_PER_SECOND as f64
}
