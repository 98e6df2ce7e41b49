//! Frame composition
//!
//! Builds a `Frame` of draw commands from the current game state. Pure scene
//! building: no platform calls, so tests can inspect exactly what a frame
//! would show. A `Canvas` backend executes the commands.

use glam::Vec2;

use crate::Settings;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Winner};

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Palette
pub const BACKGROUND: Color = Color::rgb(150, 216, 230);
pub const BUTTON: Color = Color::rgb(173, 250, 250);
pub const TEXT: Color = Color::rgb(255, 255, 255);
pub const VICTORY: Color = Color::rgb(255, 105, 180);

/// Axis-aligned rectangle (top-left origin, screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centered on `center`
    pub fn centered_square(center: Vec2, size: f32) -> Self {
        Self::new(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// The roll button rect (bottom center)
pub fn roll_button_rect() -> Rect {
    Rect::new(
        CANVAS_WIDTH / 2.0 - BUTTON_WIDTH / 2.0,
        CANVAS_HEIGHT - 80.0,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    )
}

/// A single draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled rectangle
    FillRect { rect: Rect, color: Color },
    /// Text centered on a point
    Text {
        text: String,
        center: Vec2,
        size: f32,
        color: Color,
    },
}

/// One rendered frame, back-to-front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub cmds: Vec<DrawCmd>,
}

impl Frame {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.cmds.push(DrawCmd::FillRect { rect, color });
    }

    fn text(&mut self, text: impl Into<String>, center: Vec2, size: f32, color: Color) {
        self.cmds.push(DrawCmd::Text {
            text: text.into(),
            center,
            size,
            color,
        });
    }
}

/// Compose a full frame from the game state
pub fn compose_frame(state: &GameState, settings: &Settings) -> Frame {
    let mut frame = Frame::default();
    let mid_x = CANVAS_WIDTH / 2.0;

    // Background
    frame.fill_rect(
        Rect::new(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        BACKGROUND,
    );

    // Live burst, each particle a small white square
    if settings.effective_particles()
        && let Some(burst) = &state.burst
    {
        for particle in &burst.particles {
            frame.fill_rect(Rect::centered_square(particle.pos, PARTICLE_SIZE), TEXT);
        }
    }

    // Roll result and winner message while displaying
    if state.phase == GamePhase::Displaying
        && let Some(round) = &state.round
    {
        frame.text(
            format!("{} rolled: {}", state.players.first, round.rolls.first),
            Vec2::new(mid_x, CANVAS_HEIGHT / 4.0),
            FONT_SIZE,
            TEXT,
        );
        frame.text(
            format!("{} rolled: {}", state.players.second, round.rolls.second),
            Vec2::new(mid_x, 3.0 * CANVAS_HEIGHT / 4.0),
            FONT_SIZE,
            TEXT,
        );

        // Winner message sits under the winning player's roll line; ties center.
        let message_y = match round.winner {
            Winner::First => CANVAS_HEIGHT / 4.0 + 60.0,
            Winner::Second => 3.0 * CANVAS_HEIGHT / 4.0 + 60.0,
            Winner::Tie => CANVAS_HEIGHT / 2.0 + 60.0,
        };
        frame.text(
            round.message.clone(),
            Vec2::new(mid_x, message_y),
            VICTORY_FONT_SIZE,
            VICTORY,
        );
    }

    // Roll button on top
    let button = roll_button_rect();
    frame.fill_rect(button, BUTTON);
    frame.text(
        "Roll",
        Vec2::new(mid_x, button.y + BUTTON_HEIGHT / 2.0),
        FONT_SIZE,
        TEXT,
    );

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{PlayerNames, TickInput, tick};

    fn rolled_state() -> GameState {
        let mut state = GameState::new(42, PlayerNames::new("Alice", "Bob"));
        tick(&mut state, &TickInput { roll: true });
        state
    }

    fn texts(frame: &Frame) -> Vec<&str> {
        frame
            .cmds
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_idle_frame_has_background_and_button_only() {
        let state = GameState::new(1, PlayerNames::default());
        let frame = compose_frame(&state, &Settings::default());

        assert_eq!(
            frame.cmds[0],
            DrawCmd::FillRect {
                rect: Rect::new(0.0, 0.0, 800.0, 600.0),
                color: BACKGROUND,
            }
        );
        assert_eq!(texts(&frame), vec!["Roll"]);
    }

    #[test]
    fn test_displaying_frame_shows_rolls_and_message() {
        let state = rolled_state();
        let frame = compose_frame(&state, &Settings::default());

        let texts = texts(&frame);
        assert!(texts.iter().any(|t| t.starts_with("Alice rolled: ")));
        assert!(texts.iter().any(|t| t.starts_with("Bob rolled: ")));

        let round = state.round.as_ref().unwrap();
        assert!(texts.contains(&round.message.as_str()));
    }

    #[test]
    fn test_displaying_frame_draws_every_particle() {
        let state = rolled_state();
        let frame = compose_frame(&state, &Settings::default());

        let squares = frame
            .cmds
            .iter()
            .filter(|cmd| {
                matches!(
                    cmd,
                    DrawCmd::FillRect { rect, color: TEXT }
                        if rect.w == PARTICLE_SIZE && rect.h == PARTICLE_SIZE
                )
            })
            .count();
        assert_eq!(squares, state.burst.as_ref().unwrap().len());
    }

    #[test]
    fn test_particles_setting_suppresses_burst_squares() {
        let state = rolled_state();
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let frame = compose_frame(&state, &settings);

        let squares = frame
            .cmds
            .iter()
            .filter(|cmd| {
                matches!(cmd, DrawCmd::FillRect { rect, .. } if rect.w == PARTICLE_SIZE)
            })
            .count();
        assert_eq!(squares, 0);
    }

    #[test]
    fn test_button_hit_test() {
        let button = roll_button_rect();
        assert!(button.contains(400.0, 545.0));
        assert!(!button.contains(400.0, 300.0));
        assert!(!button.contains(50.0, 545.0));
    }
}
