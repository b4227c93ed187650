//! Compile-time game configuration.

use std::time::Duration;

pub const BOARD_WIDTH: i32 = 40;
pub const BOARD_HEIGHT: i32 = 20;
pub const TICK: Duration = Duration::from_millis(120);

pub const INITIAL_SNAKE_LENGTH: i32 = 4;
pub const FOOD_REWARD: u32 = 10;

pub const LOG_FILE: &str = "snake.log";

pub const FOOD_CHAR: char = '*';
pub const SNAKE_HEAD_CHAR: char = 'O';
pub const SNAKE_BODY_CHAR: char = 'o';
pub const EMPTY_CHAR: char = ' ';
