use log::debug;
use rand::Rng;

use crate::error::BoardError;
use crate::snake::Snake;
use crate::Position;

/// The arena: fixed dimensions and a single piece of food.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    food: Position,
}

impl Board {
    /// Food starts at the center cell, even if the snake is sitting on it.
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        let food = Position::new(width / 2, height / 2);
        Ok(Board { width, height, food })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn food(&self) -> Position {
        self.food
    }

    /// Moves the food without checking the snake. Out of bounds positions are ignored.
    pub fn set_food(&mut self, pos: Position) -> bool {
        if !self.is_inside(pos) {
            return false;
        }

        self.food = pos;
        true
    }

    pub fn is_inside(&self, pos: Position) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// Rejection-samples a uniformly random cell the snake does not cover.
    pub fn place_food<R: Rng + ?Sized>(&mut self, snake: &Snake, rng: &mut R) -> Result<(), BoardError> {
        if self.cells().all(|pos| snake.occupies(pos)) {
            return Err(BoardError::Full);
        }

        let food = loop {
            let candidate = Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            if !snake.occupies(candidate) {
                break candidate;
            }
        };

        debug!("food placed at ({}, {})", food.x, food.y);
        self.food = food;
        Ok(())
    }
}
