//! Fixed-rate simulation tick
//!
//! One state-machine step per frame: trigger handling, particle advance,
//! and the display-window countdown.

use crate::canvas_center;
use crate::consts::{BURST_PARTICLE_COUNT, DISPLAY_DURATION_TICKS};

use super::outcome::{RollResult, determine_outcome};
use super::particles::ParticleBurst;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (one-shot, cleared by the caller)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Roll trigger (click on the roll button)
    pub roll: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Idle => {
            if input.roll {
                let rolls = RollResult {
                    first: state.rng.roll(),
                    second: state.rng.roll(),
                };
                let outcome = determine_outcome(rolls, &state.players);
                log::info!(
                    "{} rolled {}, {} rolled {}",
                    state.players.first,
                    rolls.first,
                    state.players.second,
                    rolls.second
                );

                let burst =
                    ParticleBurst::spawn(canvas_center(), BURST_PARTICLE_COUNT, &mut state.rng);

                // Construct-then-swap: the old round/burst (if any) are dropped whole.
                state.round = Some(outcome);
                state.burst = Some(burst);
                state.display_ticks_left = DISPLAY_DURATION_TICKS;
                state.phase = GamePhase::Displaying;
            }
        }

        GamePhase::Displaying => {
            // Roll triggers are ignored here; the display window runs to completion.
            if let Some(burst) = state.burst.as_mut() {
                burst.advance_all();
            }

            state.display_ticks_left = state.display_ticks_left.saturating_sub(1);
            if state.display_ticks_left == 0 {
                state.round = None;
                state.burst = None;
                state.phase = GamePhase::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::outcome::PlayerNames;
    use glam::Vec2;

    fn new_state() -> GameState {
        GameState::new(12345, PlayerNames::default())
    }

    #[test]
    fn test_idle_without_trigger_stays_idle() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.round.is_none());
        assert!(state.burst.is_none());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_roll_trigger_enters_displaying() {
        let mut state = new_state();
        tick(&mut state, &TickInput { roll: true });

        assert_eq!(state.phase, GamePhase::Displaying);
        assert_eq!(state.display_ticks_left, DISPLAY_DURATION_TICKS);

        let round = state.round.as_ref().expect("round must be set");
        assert!((1..=100).contains(&round.rolls.first));
        assert!((1..=100).contains(&round.rolls.second));

        let burst = state.burst.as_ref().expect("burst must be set");
        assert_eq!(burst.len(), BURST_PARTICLE_COUNT);
        assert_eq!(burst.origin, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_display_window_expires_back_to_idle() {
        let mut state = new_state();
        tick(&mut state, &TickInput { roll: true });

        for _ in 0..DISPLAY_DURATION_TICKS - 1 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.phase, GamePhase::Displaying);
        }

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.round.is_none());
        assert!(state.burst.is_none());
    }

    #[test]
    fn test_roll_during_display_is_ignored() {
        let mut state = new_state();
        tick(&mut state, &TickInput { roll: true });
        let round = state.round.clone();
        let ticks_left = state.display_ticks_left;

        tick(&mut state, &TickInput { roll: true });

        assert_eq!(state.phase, GamePhase::Displaying);
        assert_eq!(state.round, round, "round must not be replaced mid-display");
        assert_eq!(state.display_ticks_left, ticks_left - 1);
    }

    #[test]
    fn test_particles_advance_while_displaying() {
        let mut state = new_state();
        tick(&mut state, &TickInput { roll: true });

        let before = state.burst.as_ref().unwrap().particles.clone();
        tick(&mut state, &TickInput::default());
        let after = &state.burst.as_ref().unwrap().particles;

        for (prior, now) in before.iter().zip(after) {
            assert_eq!(now.pos, prior.pos + prior.vel);
        }
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input script match exactly.
        let mut a = new_state();
        let mut b = new_state();

        let script = [true, false, false, true, false];
        for &roll in &script {
            tick(&mut a, &TickInput { roll });
            tick(&mut b, &TickInput { roll });
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.round, b.round);
        assert_eq!(a.burst, b.burst);
    }
}
