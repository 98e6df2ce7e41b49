//! Dice Duel entry point
//!
//! A real windowing backend is not wired up; the binary drives the frame
//! loop headlessly through the scripted event source and logs one round.

use std::time::{SystemTime, UNIX_EPOCH};

use dice_duel::consts::DISPLAY_DURATION_TICKS;
use dice_duel::platform::headless::{NullCanvas, ScriptedEvents};
use dice_duel::platform::{Event, FrameClock};
use dice_duel::renderer::roll_button_rect;
use dice_duel::sim::PlayerNames;
use dice_duel::{Game, Settings};

fn main() {
    env_logger::init();

    // Player names come from the excluded name-entry screen; argv stands in.
    let mut args = std::env::args().skip(1);
    let players = PlayerNames::new(
        args.next().unwrap_or_else(|| "Player 1".to_string()),
        args.next().unwrap_or_else(|| "Player 2".to_string()),
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let settings = Settings::load();
    let mut game = Game::new(seed, players, settings);

    // Scripted demo: click the roll button, watch the full display window,
    // then quit cleanly.
    let button = roll_button_rect();
    let click = Event::PointerDown {
        x: button.x + button.w / 2.0,
        y: button.y + button.h / 2.0,
    };
    let mut script: Vec<Vec<Event>> = vec![vec![click]];
    script.extend((0..DISPLAY_DURATION_TICKS).map(|_| Vec::new()));
    script.push(vec![Event::Quit]);

    let mut events = ScriptedEvents::new(script);
    let mut canvas = NullCanvas;
    let mut clock = FrameClock::new();

    log::info!("dice-duel starting (no windowing backend; running headless demo)");
    game.run(&mut events, &mut canvas, &mut clock);
    log::info!("dice-duel finished after {} ticks", game.state.time_ticks);
}
