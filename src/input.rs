//! Keyboard input mapped to game actions.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TermError;
use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    TurnUp,
    TurnDown,
    TurnLeft,
    TurnRight,
    Quit,
}

impl Action {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::TurnUp => Some(Direction::Up),
            Action::TurnDown => Some(Direction::Down),
            Action::TurnLeft => Some(Direction::Left),
            Action::TurnRight => Some(Direction::Right),
            Action::None | Action::Quit => None,
        }
    }
}

/// Map a key press to an action.
pub fn map_key(key: KeyEvent) -> Action {
    // Raw mode swallows SIGINT, so Ctrl+C has to be handled here.
    if is_ctrl_c(&key) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') => Action::TurnUp,
        KeyCode::Char('s') | KeyCode::Char('S') => Action::TurnDown,
        KeyCode::Char('a') | KeyCode::Char('A') => Action::TurnLeft,
        KeyCode::Char('d') | KeyCode::Char('D') => Action::TurnRight,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::None,
    }
}

/// Returns the next pending key press as an action, never blocking.
/// Non-key events and key releases are consumed and skipped.
pub fn poll_action() -> Result<Action, TermError> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
    }

    Ok(Action::None)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
