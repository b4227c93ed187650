use std::collections::VecDeque;

use crate::error::SnakeError;
use crate::Position;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Unit step in grid coordinates; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// The snake body, head first.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
}

// Never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl Snake {
    /// Lays the body out from `start` towards -x, whatever `direction` is.
    pub fn new(start: Position, direction: Direction, initial_length: i32) -> Result<Self, SnakeError> {
        if initial_length <= 0 {
            return Err(SnakeError::InvalidLength(initial_length));
        }

        let body = (0..initial_length)
            .map(|i| start.x.checked_sub(i).map(|x| Position::new(x, start.y)))
            .collect::<Option<VecDeque<_>>>()
            .ok_or(SnakeError::OutOfRange(start.x))?;
        Ok(Snake { body, direction })
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> impl Iterator<Item = &Position> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Ignored when `new_direction` would reverse the snake onto itself.
    /// Returns whether the heading was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }

        self.direction = new_direction;
        true
    }

    pub fn next_head_position(&self) -> Position {
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        // Saturates at the edge of the coordinate space; no board reaches that far.
        Position::new(head.x.saturating_add(dx), head.y.saturating_add(dy))
    }

    pub fn advance(&mut self, grow: bool) -> Result<(), SnakeError> {
        let new_head = self.next_head_position();

        self.body.try_reserve(1).map_err(|_| SnakeError::OutOfMemory)?;
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }

        Ok(())
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}
