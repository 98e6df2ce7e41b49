//! Seeded dice roller
//!
//! Wraps a PCG generator so every roll is reproducible from the run seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{PARTICLE_SPEED_MAX, ROLL_MAX, ROLL_MIN};

/// Source of all randomness in the game
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: Pcg32,
}

impl DiceRoller {
    /// Create a roller from a run seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Roll one die: uniform over [ROLL_MIN, ROLL_MAX]
    pub fn roll(&mut self) -> u32 {
        self.rng.random_range(ROLL_MIN..=ROLL_MAX)
    }

    /// Sample one particle velocity component: uniform over [-MAX, MAX]
    pub fn velocity_component(&mut self) -> f32 {
        self.rng.random_range(-PARTICLE_SPEED_MAX..=PARTICLE_SPEED_MAX)
    }
}
