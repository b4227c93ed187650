//! The tick loop, kept apart from the terminal so it can run headless.

use log::error;

use crate::error::TermError;
use crate::game::{SnakeGame, Snapshot};
use crate::input::Action;

/// Runs ticks until the game leaves `Running`: poll, update, draw, wait.
///
/// A failing poll or draw ends the game instead of escaping as an error;
/// once the game has started only startup can fail the process.
pub fn play<P, D, W>(game: &mut SnakeGame, mut poll: P, mut draw: D, mut wait: W)
where
    P: FnMut() -> Result<Action, TermError>,
    D: FnMut(&Snapshot) -> Result<(), TermError>,
    W: FnMut(),
{
    while game.is_running() {
        if let Err(err) = tick(game, &mut poll, &mut draw) {
            error!("terminal failed mid-game: {}", err);
            game.abort();
            break;
        }

        wait();
    }
}

fn tick<P, D>(game: &mut SnakeGame, poll: &mut P, draw: &mut D) -> Result<(), TermError>
where
    P: FnMut() -> Result<Action, TermError>,
    D: FnMut(&Snapshot) -> Result<(), TermError>,
{
    let action = poll()?;
    game.apply(action);

    game.update();
    draw(&game.snapshot())
}
