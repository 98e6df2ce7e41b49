//! Dice Duel - a two-player dice-rolling duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rolls, outcomes, particle bursts)
//! - `renderer`: Frame composition into draw commands
//! - `platform`: Event/canvas/clock abstraction for the frame loop
//! - `game`: The frame loop driver

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fixed tick rate (60 Hz, matches the frame-rate cap)
    pub const TICKS_PER_SECOND: u32 = 60;
    pub const TICK_DT: f32 = 1.0 / TICKS_PER_SECOND as f32;

    /// Dice roll range (inclusive)
    pub const ROLL_MIN: u32 = 1;
    pub const ROLL_MAX: u32 = 100;

    /// Particle burst defaults
    pub const BURST_PARTICLE_COUNT: usize = 50;
    pub const PARTICLE_SIZE: f32 = 10.0;
    /// Velocity components are sampled uniformly from [-MAX, MAX] per axis
    pub const PARTICLE_SPEED_MAX: f32 = 2.0;

    /// How long a roll result stays on screen (3 seconds at 60 Hz)
    pub const DISPLAY_DURATION_TICKS: u32 = 3 * TICKS_PER_SECOND;

    /// Roll button rect (bottom center)
    pub const BUTTON_WIDTH: f32 = 200.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;

    /// Font sizes (px)
    pub const FONT_SIZE: f32 = 36.0;
    pub const VICTORY_FONT_SIZE: f32 = 48.0;
}

/// Center of the canvas, where bursts spawn
#[inline]
pub fn canvas_center() -> glam::Vec2 {
    glam::Vec2::new(consts::CANVAS_WIDTH / 2.0, consts::CANVAS_HEIGHT / 2.0)
}
