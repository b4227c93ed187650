use std::process::ExitCode;
use std::thread::sleep;

use anyhow::{Context, Result};
use log::{error, info, warn};

use snake::config::{LOG_FILE, TICK};
use snake::input::poll_action;
use snake::runner;
use snake::term::{self, TermManager};
use snake::SnakeGame;

fn main() -> ExitCode {
    if let Err(err) = snake::logging::init(LOG_FILE) {
        eprintln!("[WARN] logging disabled: {:#}", err);
    }

    let game = match run() {
        Ok(game) => game,
        Err(err) => {
            error!("{:#}", err);
            eprintln!("[ERROR] {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    if let Some(message) = game.status().final_message(game.score()) {
        info!("{}", message);
        if let Err(err) = term::farewell(&message) {
            error!("{}", err);
            println!("{}", message);
        }
    }

    ExitCode::SUCCESS
}

/// Only startup can fail; errors after that end the game instead.
fn run() -> Result<SnakeGame> {
    let mut term = TermManager::acquire().context("failed to initialize terminal")?;
    let mut game = SnakeGame::new().context("failed to create game")?;

    if let Err(err) = term.clear() {
        warn!("failed to clear screen: {}", err);
    }

    runner::play(&mut game, poll_action, |snapshot| term.draw(snapshot), || sleep(TICK));

    // Restore the terminal before the final message is printed
    drop(term);
    Ok(game)
}
