//! Platform abstraction layer
//!
//! The frame loop only needs three seams: an input event source, a canvas
//! that can present a composed frame, and a frame-rate clock. Headless
//! implementations back the tests and the demo binary; a real windowing
//! backend plugs in behind the same traits.

pub mod headless;

use std::time::{Duration, Instant};

use crate::consts::TICKS_PER_SECOND;
use crate::renderer::Frame;

/// An input event, already translated to canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Clean shutdown request
    Quit,
    /// Pointer press at canvas coordinates
    PointerDown { x: f32, y: f32 },
    /// Key press; consumed by the name-entry UI, ignored by the game loop
    KeyDown(char),
}

/// Non-blocking input source polled once per tick
pub trait EventSource {
    /// Refresh the pending queue; called once at the start of each tick
    fn pump(&mut self) {}

    /// Next pending event, or `None` when the queue is drained
    fn poll(&mut self) -> Option<Event>;
}

/// Presentation target for composed frames
pub trait Canvas {
    fn present(&mut self, frame: &Frame);
}

/// Wall-clock frame-rate governor (60 Hz)
///
/// The wait is a pure delay; it never touches game state.
#[derive(Debug)]
pub struct FrameClock {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / TICKS_PER_SECOND,
            last_frame: Instant::now(),
        }
    }

    /// Sleep out the remainder of the current frame budget
    pub fn wait_for_next_frame(&mut self) {
        let elapsed = self.last_frame.elapsed();
        if elapsed < self.frame_budget {
            std::thread::sleep(self.frame_budget - elapsed);
        }
        self.last_frame = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
