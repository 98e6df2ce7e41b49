//! Headless event source and canvas
//!
//! Used by the tests and the demo binary. `ScriptedEvents` replays a fixed
//! event sequence spread across ticks; `RecordingCanvas` keeps every
//! presented frame for inspection.

use std::collections::VecDeque;

use super::{Canvas, Event, EventSource};
use crate::renderer::Frame;

/// Replays a scripted sequence of per-tick event batches
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    ticks: VecDeque<Vec<Event>>,
    current: VecDeque<Event>,
}

impl ScriptedEvents {
    pub fn new(ticks: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Self {
            ticks: ticks.into_iter().collect(),
            current: VecDeque::new(),
        }
    }

    /// Move to the next tick's batch. Call once per loop iteration.
    pub fn next_tick(&mut self) {
        self.current = self.ticks.pop_front().unwrap_or_default().into();
    }

    /// True once every scripted batch has been consumed
    pub fn exhausted(&self) -> bool {
        self.ticks.is_empty() && self.current.is_empty()
    }
}

impl EventSource for ScriptedEvents {
    fn pump(&mut self) {
        self.next_tick();
    }

    fn poll(&mut self) -> Option<Event> {
        self.current.pop_front()
    }
}

/// Records every presented frame
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub frames: Vec<Frame>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Canvas for RecordingCanvas {
    fn present(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}

/// Discards frames; for runs where only the log output matters
#[derive(Debug, Default)]
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn present(&mut self, _frame: &Frame) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_events_replay_per_tick() {
        let mut events = ScriptedEvents::new([
            vec![Event::PointerDown { x: 1.0, y: 2.0 }],
            vec![],
            vec![Event::KeyDown('a'), Event::Quit],
        ]);

        events.next_tick();
        assert_eq!(events.poll(), Some(Event::PointerDown { x: 1.0, y: 2.0 }));
        assert_eq!(events.poll(), None);

        events.next_tick();
        assert_eq!(events.poll(), None);

        events.next_tick();
        assert_eq!(events.poll(), Some(Event::KeyDown('a')));
        assert_eq!(events.poll(), Some(Event::Quit));
        assert!(events.exhausted());
    }
}
