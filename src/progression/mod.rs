//! Player level, gold, and the rod shop.

pub mod logic;
pub mod rods;

pub use logic::{exp_for_fish, next_threshold, Progression, BASE_EXP_BY_RARITY};
pub use rods::{rod_by_id, starter_rod, validate_rods, Rod, ROD_CATALOG, STARTER_ROD_ID};
