//! Cast/wait/bite/reel state machine for a single angler.
//!
//! All waiting is modeled as explicit countdown state advanced once per tick.
//! The machine never resolves a catch itself: entering `Reeling` hands control
//! to the caller, which resolves the catch once and calls [`FishingEncounter::finish_reel`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::{Vec2, WaterRegion};
use crate::core::constants::{
    ticks_to_seconds, BITE_DEADLINE_FLOOR_TICKS, BITE_DEADLINE_MAX_TICKS,
    BITE_DEADLINE_MIN_TICKS, BOBBER_MAX_DISTANCE, BOBBER_MAX_SIDEWAYS, BOBBER_MIN_DISTANCE,
    CAST_ANIMATION_TICKS, FAILED_DISPLAY_TICKS, REACTION_WINDOW_TICKS, SHORE_MAX_X, SHORE_MIN_X,
    SHORE_Y,
};

/// Phase of the current encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncounterState {
    #[default]
    Idle,
    Casting,
    Waiting,
    Bite,
    Reeling,
    Failed,
}

/// Result of a cast/reel input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOutcome {
    /// Idle -> Casting
    Started,
    /// Bite -> Reeling
    Reeled,
    /// Input had no effect in the current state.
    Ignored,
}

/// Transition produced by a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncounterEvent {
    /// Casting finished; the bobber landed and the bite countdown started.
    LineOut { bobber: Vec2, bite_deadline: u32 },
    /// A fish bit; the reaction window is open.
    Bite,
    /// The reaction window elapsed without a reel.
    Escaped,
    /// The failure display finished.
    ReturnedToIdle,
}

/// Reaction data captured at the moment of a successful reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelTiming {
    /// Ticks spent in `Bite` before the reel input.
    pub reaction_ticks: u32,
    /// Ticks the line spent in the water (waiting plus bite).
    pub line_ticks: u32,
}

impl ReelTiming {
    pub fn reaction_time(&self) -> f64 {
        ticks_to_seconds(self.reaction_ticks)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FishingEncounter {
    state: EncounterState,
    player: Vec2,
    region: WaterRegion,
    bobber: Option<Vec2>,
    cast_progress: u32,
    wait_elapsed: u32,
    bite_deadline: u32,
    bite_elapsed: u32,
    failed_elapsed: u32,
    line_ticks: u32,
    reel: Option<ReelTiming>,
}

impl Default for FishingEncounter {
    fn default() -> Self {
        Self::new(WaterRegion::DEFAULT)
    }
}

impl FishingEncounter {
    pub fn new(region: WaterRegion) -> Self {
        Self {
            state: EncounterState::Idle,
            player: Vec2::new((SHORE_MIN_X + SHORE_MAX_X) / 2.0, SHORE_Y),
            region,
            bobber: None,
            cast_progress: 0,
            wait_elapsed: 0,
            bite_deadline: 0,
            bite_elapsed: 0,
            failed_elapsed: 0,
            line_ticks: 0,
            reel: None,
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == EncounterState::Idle
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn bobber(&self) -> Option<Vec2> {
        self.bobber
    }

    pub fn region(&self) -> WaterRegion {
        self.region
    }

    /// Cast animation progress in `[0, 1]`.
    pub fn cast_progress(&self) -> f64 {
        self.cast_progress as f64 / CAST_ANIMATION_TICKS as f64
    }

    pub fn bite_deadline(&self) -> u32 {
        self.bite_deadline
    }

    pub fn wait_elapsed(&self) -> u32 {
        self.wait_elapsed
    }

    pub fn bite_elapsed(&self) -> u32 {
        self.bite_elapsed
    }

    /// Ticks left in the reaction window while a fish is on.
    pub fn reaction_ticks_remaining(&self) -> u32 {
        match self.state {
            EncounterState::Bite => REACTION_WINDOW_TICKS.saturating_sub(self.bite_elapsed),
            _ => 0,
        }
    }

    /// Timing of the reel that put the machine into `Reeling`.
    pub fn reel_timing(&self) -> Option<ReelTiming> {
        self.reel
    }

    /// Walks the angler along the shoreline. Only allowed while idle.
    pub fn move_player(&mut self, dx: f32) -> bool {
        if self.state != EncounterState::Idle {
            return false;
        }
        self.player.x = (self.player.x + dx).clamp(SHORE_MIN_X, SHORE_MAX_X);
        true
    }

    /// Handles the single cast/reel input.
    pub fn request_cast(&mut self) -> CastOutcome {
        match self.state {
            EncounterState::Idle => {
                self.clear_timers();
                self.state = EncounterState::Casting;
                CastOutcome::Started
            }
            EncounterState::Bite => {
                self.reel = Some(ReelTiming {
                    reaction_ticks: self.bite_elapsed,
                    line_ticks: self.line_ticks,
                });
                self.state = EncounterState::Reeling;
                CastOutcome::Reeled
            }
            _ => CastOutcome::Ignored,
        }
    }

    /// Advances the machine by one tick.
    ///
    /// `bite_speed_mult` only matters on the tick the cast completes, when
    /// it scales the freshly sampled bite deadline.
    pub fn tick(&mut self, rng: &mut impl Rng, bite_speed_mult: f64) -> Option<EncounterEvent> {
        match self.state {
            EncounterState::Idle | EncounterState::Reeling => None,
            EncounterState::Casting => {
                self.cast_progress += 1;
                if self.cast_progress < CAST_ANIMATION_TICKS {
                    return None;
                }
                let bobber = place_bobber(self.player, &self.region, rng);
                let bite_deadline = sample_bite_deadline(rng, bite_speed_mult);
                self.bobber = Some(bobber);
                self.bite_deadline = bite_deadline;
                self.wait_elapsed = 0;
                self.state = EncounterState::Waiting;
                Some(EncounterEvent::LineOut {
                    bobber,
                    bite_deadline,
                })
            }
            EncounterState::Waiting => {
                self.wait_elapsed += 1;
                self.line_ticks += 1;
                if self.wait_elapsed < self.bite_deadline {
                    return None;
                }
                self.bite_elapsed = 0;
                self.state = EncounterState::Bite;
                Some(EncounterEvent::Bite)
            }
            EncounterState::Bite => {
                self.bite_elapsed += 1;
                self.line_ticks += 1;
                if self.bite_elapsed < REACTION_WINDOW_TICKS {
                    return None;
                }
                self.failed_elapsed = 0;
                self.state = EncounterState::Failed;
                Some(EncounterEvent::Escaped)
            }
            EncounterState::Failed => {
                self.failed_elapsed += 1;
                if self.failed_elapsed < FAILED_DISPLAY_TICKS {
                    return None;
                }
                self.state = EncounterState::Idle;
                self.clear_timers();
                Some(EncounterEvent::ReturnedToIdle)
            }
        }
    }

    /// Returns a reeling machine to idle once the catch has been resolved.
    pub fn finish_reel(&mut self) -> Option<ReelTiming> {
        if self.state != EncounterState::Reeling {
            return None;
        }
        let timing = self.reel;
        self.state = EncounterState::Idle;
        self.clear_timers();
        timing
    }

    fn clear_timers(&mut self) {
        self.bobber = None;
        self.cast_progress = 0;
        self.wait_elapsed = 0;
        self.bite_deadline = 0;
        self.bite_elapsed = 0;
        self.failed_elapsed = 0;
        self.line_ticks = 0;
        self.reel = None;
    }
}

/// Picks where the bobber lands: out over the water from the angler, clamped
/// to the water surface.
pub fn place_bobber(player: Vec2, region: &WaterRegion, rng: &mut impl Rng) -> Vec2 {
    let distance = rng.gen_range(BOBBER_MIN_DISTANCE..=BOBBER_MAX_DISTANCE);
    let sideways = rng.gen_range(-BOBBER_MAX_SIDEWAYS..=BOBBER_MAX_SIDEWAYS);
    region.clamp(Vec2::new(player.x + sideways, player.y - distance))
}

/// Samples the bite deadline in ticks, scaled by the bite-speed multiplier.
///
/// Lower multipliers bite sooner. The result never drops below
/// `BITE_DEADLINE_FLOOR_TICKS`.
pub fn sample_bite_deadline(rng: &mut impl Rng, bite_speed_mult: f64) -> u32 {
    let base = rng.gen_range(BITE_DEADLINE_MIN_TICKS..=BITE_DEADLINE_MAX_TICKS);
    let scaled = base as f64 * bite_speed_mult;
    if !scaled.is_finite() {
        return BITE_DEADLINE_FLOOR_TICKS;
    }
    (scaled.round().max(0.0) as u32).max(BITE_DEADLINE_FLOOR_TICKS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run_until_state(
        encounter: &mut FishingEncounter,
        rng: &mut ChaCha8Rng,
        target: EncounterState,
        limit: u32,
    ) -> u32 {
        for n in 1..=limit {
            encounter.tick(rng, 1.0);
            if encounter.state() == target {
                return n;
            }
        }
        panic!("never reached {:?} within {} ticks", target, limit);
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    #[test]
    fn test_cast_from_idle_starts_casting() {
        let mut encounter = FishingEncounter::default();
        assert_eq!(encounter.request_cast(), CastOutcome::Started);
        assert_eq!(encounter.state(), EncounterState::Casting);
    }

    #[test]
    fn test_cast_ignored_outside_idle_and_bite() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut encounter = FishingEncounter::default();
        encounter.request_cast();
        assert_eq!(encounter.request_cast(), CastOutcome::Ignored);
        assert_eq!(encounter.state(), EncounterState::Casting);

        run_until_state(&mut encounter, &mut rng, EncounterState::Waiting, 100);
        assert_eq!(encounter.request_cast(), CastOutcome::Ignored);
        assert_eq!(encounter.state(), EncounterState::Waiting);
    }

    #[test]
    fn test_movement_only_while_idle() {
        let mut encounter = FishingEncounter::default();
        let start = encounter.player().x;
        assert!(encounter.move_player(50.0));
        assert_eq!(encounter.player().x, start + 50.0);

        encounter.request_cast();
        assert!(!encounter.move_player(50.0));
        assert_eq!(encounter.player().x, start + 50.0);
    }

    #[test]
    fn test_movement_clamped_to_shore() {
        let mut encounter = FishingEncounter::default();
        encounter.move_player(-10_000.0);
        assert_eq!(encounter.player().x, SHORE_MIN_X);
        encounter.move_player(10_000.0);
        assert_eq!(encounter.player().x, SHORE_MAX_X);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    #[test]
    fn test_casting_takes_fixed_ticks_and_places_bobber_in_water() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..50 {
            let mut encounter = FishingEncounter::default();
            encounter.move_player(rng.gen_range(-1000.0..1000.0));
            encounter.request_cast();
            for _ in 0..CAST_ANIMATION_TICKS - 1 {
                assert_eq!(encounter.tick(&mut rng, 1.0), None);
            }
            match encounter.tick(&mut rng, 1.0) {
                Some(EncounterEvent::LineOut {
                    bobber,
                    bite_deadline,
                }) => {
                    assert!(encounter.region().contains(bobber));
                    assert!(bite_deadline >= BITE_DEADLINE_MIN_TICKS);
                    assert!(bite_deadline <= BITE_DEADLINE_MAX_TICKS);
                }
                other => panic!("expected LineOut, got {:?}", other),
            }
            assert_eq!(encounter.state(), EncounterState::Waiting);
        }
    }

    #[test]
    fn test_no_reel_goes_bite_then_failed_then_idle() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut encounter = FishingEncounter::default();
        encounter.request_cast();
        run_until_state(&mut encounter, &mut rng, EncounterState::Waiting, 100);
        let deadline = encounter.bite_deadline();

        let waited = run_until_state(&mut encounter, &mut rng, EncounterState::Bite, 1000);
        assert_eq!(waited, deadline);

        let window = run_until_state(&mut encounter, &mut rng, EncounterState::Failed, 1000);
        assert_eq!(window, REACTION_WINDOW_TICKS);

        let shown = run_until_state(&mut encounter, &mut rng, EncounterState::Idle, 1000);
        assert_eq!(shown, FAILED_DISPLAY_TICKS);
        assert_eq!(encounter.bobber(), None);
        assert_eq!(encounter.bite_deadline(), 0);
    }

    #[test]
    fn test_reel_during_bite_records_reaction_from_bite_onset() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut encounter = FishingEncounter::default();
        encounter.request_cast();
        run_until_state(&mut encounter, &mut rng, EncounterState::Waiting, 100);
        let deadline = encounter.bite_deadline();
        run_until_state(&mut encounter, &mut rng, EncounterState::Bite, 1000);

        for _ in 0..24 {
            encounter.tick(&mut rng, 1.0);
        }
        assert_eq!(encounter.request_cast(), CastOutcome::Reeled);
        assert_eq!(encounter.state(), EncounterState::Reeling);

        let timing = encounter.reel_timing().unwrap();
        assert_eq!(timing.reaction_ticks, 24);
        assert_eq!(timing.line_ticks, deadline + 24);
        assert!((timing.reaction_time() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_reeling_waits_for_finish() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut encounter = FishingEncounter::default();
        encounter.request_cast();
        run_until_state(&mut encounter, &mut rng, EncounterState::Bite, 2000);
        encounter.request_cast();

        for _ in 0..500 {
            assert_eq!(encounter.tick(&mut rng, 1.0), None);
        }
        assert_eq!(encounter.state(), EncounterState::Reeling);
        assert_eq!(encounter.request_cast(), CastOutcome::Ignored);

        assert!(encounter.finish_reel().is_some());
        assert!(encounter.is_idle());
        assert!(encounter.reel_timing().is_none());
        assert!(encounter.finish_reel().is_none());
    }

    // =========================================================================
    // Deadline sampling
    // =========================================================================

    #[test]
    fn test_bite_deadline_scales_with_multiplier() {
        let mut fast_rng = ChaCha8Rng::seed_from_u64(7);
        let mut slow_rng = ChaCha8Rng::seed_from_u64(7);
        let fast = sample_bite_deadline(&mut fast_rng, 0.5);
        let slow = sample_bite_deadline(&mut slow_rng, 1.0);
        assert!(fast < slow);
        assert!((fast as i64 - (slow as i64) / 2).abs() <= 1);
    }

    #[test]
    fn test_bite_deadline_never_below_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for mult in [0.0, -3.0, 0.001, f64::NAN, f64::NEG_INFINITY] {
            let deadline = sample_bite_deadline(&mut rng, mult);
            assert!(deadline >= BITE_DEADLINE_FLOOR_TICKS, "mult {}", mult);
        }
    }
}
