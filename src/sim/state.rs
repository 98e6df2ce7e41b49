//! Game state
//!
//! All mutable state is owned by one `GameState` value and passed into the
//! update and render steps. The burst and round are replaced wholesale
//! (construct-then-swap) on each roll, never mutated in place.

use super::outcome::{PlayerNames, RoundOutcome};
use super::particles::ParticleBurst;
use super::rng::DiceRoller;

/// Current phase of the frame loop's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a roll trigger; no active burst
    Idle,
    /// A burst and outcome are on screen, counting down to expiry
    Displaying,
}

/// Complete game state (deterministic for a given seed and input script)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Source of all rolls and particle velocities
    pub rng: DiceRoller,
    /// Player display labels, fixed before the loop starts
    pub players: PlayerNames,
    /// Current phase
    pub phase: GamePhase,
    /// The round currently on screen, if any
    pub round: Option<RoundOutcome>,
    /// The burst currently animating, if any (at most one)
    pub burst: Option<ParticleBurst>,
    /// Ticks remaining in the display window
    pub display_ticks_left: u32,
    /// Tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh idle state with the given seed and player names
    pub fn new(seed: u64, players: PlayerNames) -> Self {
        Self {
            seed,
            rng: DiceRoller::new(seed),
            players,
            phase: GamePhase::Idle,
            round: None,
            burst: None,
            display_ticks_left: 0,
            time_ticks: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_and_empty() {
        let state = GameState::new(1, PlayerNames::default());
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.round.is_none());
        assert!(state.burst.is_none());
        assert_eq!(state.display_ticks_left, 0);
        assert_eq!(state.time_ticks, 0);
    }
}
