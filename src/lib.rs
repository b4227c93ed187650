pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod runner;
pub mod snake;
pub mod term;

pub use board::Board;
pub use error::{BoardError, GameError, SnakeError, TermError};
pub use game::{Cell, SnakeGame, Snapshot, Status};
pub use input::Action;
pub use snake::{Direction, Snake};

/// Grid coordinates. Bounds are the board's business.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}
