//! Frame loop driver
//!
//! One tick: poll pending input events, run one state-machine step, compose
//! and present one frame, then wait out the frame budget. Single-threaded
//! and cooperative; the only blocking point is the frame clock's delay.

use crate::Settings;
use crate::platform::{Canvas, Event, EventSource, FrameClock};
use crate::renderer::{compose_frame, roll_button_rect};
use crate::sim::{GameState, PlayerNames, TickInput, tick};

/// The game instance: owns all state and the pending per-tick input
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    input: TickInput,
}

impl Game {
    pub fn new(seed: u64, players: PlayerNames, settings: Settings) -> Self {
        log::info!("new game, seed {seed}");
        Self {
            state: GameState::new(seed, players),
            settings,
            input: TickInput::default(),
        }
    }

    /// Drain pending events into the tick input. Returns false on `Quit`.
    pub fn process_events(&mut self, events: &mut impl EventSource) -> bool {
        while let Some(event) = events.poll() {
            match event {
                Event::Quit => {
                    log::info!("quit requested");
                    return false;
                }
                Event::PointerDown { x, y } => {
                    if roll_button_rect().contains(x, y) {
                        self.input.roll = true;
                    }
                }
                // Key input belongs to the name-entry UI, not the loop.
                Event::KeyDown(_) => {}
            }
        }
        true
    }

    /// Run one tick and present the resulting frame
    pub fn step(&mut self, canvas: &mut impl Canvas) {
        let input = self.input;
        tick(&mut self.state, &input);
        // Clear one-shot inputs after processing
        self.input.roll = false;

        let frame = compose_frame(&self.state, &self.settings);
        canvas.present(&frame);
    }

    /// Drive the loop until a `Quit` event arrives
    pub fn run(
        &mut self,
        events: &mut impl EventSource,
        canvas: &mut impl Canvas,
        clock: &mut FrameClock,
    ) {
        loop {
            events.pump();
            if !self.process_events(events) {
                break;
            }
            self.step(canvas);
            clock.wait_for_next_frame();
        }
    }
}
