//! Particle burst visual effect
//!
//! A burst is spawned at the canvas center on every roll and discarded
//! wholesale when the display window ends. Particles never expire on their
//! own and are never clipped to the canvas.

use glam::Vec2;

use super::rng::DiceRoller;

/// A single transient visual entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    /// Spawn at `origin` with velocity components sampled independently
    pub fn spawn(origin: Vec2, rng: &mut DiceRoller) -> Self {
        Self {
            pos: origin,
            vel: Vec2::new(rng.velocity_component(), rng.velocity_component()),
        }
    }

    /// One Euler step: position += velocity. Velocity is invariant.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// One roll's group of particles, created together and discarded together
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleBurst {
    pub origin: Vec2,
    pub particles: Vec<Particle>,
}

impl ParticleBurst {
    /// Spawn `count` particles at `origin`. Zero count gives an empty burst.
    pub fn spawn(origin: Vec2, count: usize, rng: &mut DiceRoller) -> Self {
        let particles = (0..count).map(|_| Particle::spawn(origin, rng)).collect();
        Self { origin, particles }
    }

    /// Advance every particle by one tick
    pub fn advance_all(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
