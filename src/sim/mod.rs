//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod outcome;
pub mod particles;
pub mod rng;
pub mod state;
pub mod tick;

pub use outcome::{PlayerNames, RollResult, RoundOutcome, Winner, determine_outcome};
pub use particles::{Particle, ParticleBurst};
pub use rng::DiceRoller;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
