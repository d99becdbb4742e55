//! Castaway - fishing game core library
//!
//! The encounter state machine, catch resolution, environment model, and the
//! persisted progression records, with no rendering or input dependencies.

pub mod achievements;
pub mod character;
pub mod collection;
pub mod config;
pub mod core;
pub mod daily_rewards;
pub mod environment;
pub mod error;
pub mod fishing;
pub mod profile;
pub mod progression;
pub mod rewards;
pub mod statistics;
pub mod utils;
