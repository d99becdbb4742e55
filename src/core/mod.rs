//! Core game loop: constants, per-tick orchestration, and the session.

pub mod constants;
pub mod session;
pub mod tick;

pub use session::{validate_catalogs, Session};
pub use tick::{game_tick, CatchReport, TickEvent, TickResult};
