use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::board::Board;
use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CHAR, FOOD_CHAR, FOOD_REWARD, INITIAL_SNAKE_LENGTH, SNAKE_BODY_CHAR,
    SNAKE_HEAD_CHAR,
};
use crate::error::GameError;
use crate::input::Action;
use crate::snake::{Direction, Snake};
use crate::Position;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    Quit,
    Collision,
}

impl Status {
    /// Line printed once the game is over, `None` while still running.
    pub fn final_message(self, score: u32) -> Option<String> {
        match self {
            Status::Running => None,
            Status::Collision => Some(format!("Game Over! Final score: {}", score)),
            Status::Quit => Some(format!("You quit the game. Final score: {}", score)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    Head,
    Body,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::Food => FOOD_CHAR,
            Cell::Head => SNAKE_HEAD_CHAR,
            Cell::Body => SNAKE_BODY_CHAR,
        }
    }
}

/// Everything the display needs for one frame. Cells are row-major.
/// Only built by [`SnakeGame::snapshot`], so `width` is always positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    score: u32,
    status: Status,
}

impl Snapshot {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }
}

pub struct SnakeGame {
    board: Board,
    snake: Snake,
    score: u32,
    status: Status,
    rng: StdRng,
}

impl SnakeGame {
    pub fn new() -> Result<Self, GameError> {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Result<Self, GameError> {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Builds a running game around an existing board and snake. The board's
    /// current food is kept as is.
    pub fn from_parts(board: Board, snake: Snake, seed: u64) -> Self {
        SnakeGame { board, snake, score: 0, status: Status::Running, rng: StdRng::seed_from_u64(seed) }
    }

    fn with_rng(mut rng: StdRng) -> Result<Self, GameError> {
        let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT)?;
        let center = Position::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2);
        let snake = Snake::new(center, Direction::Right, INITIAL_SNAKE_LENGTH)?;
        board.place_food(&snake, &mut rng)?;

        info!("new {}x{} game, snake at ({}, {})", BOARD_WIDTH, BOARD_HEIGHT, center.x, center.y);
        Ok(SnakeGame { board, snake, score: 0, status: Status::Running, rng })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::None => {}
            turn => {
                if let Some(dir) = turn.direction() {
                    self.change_direction(dir);
                }
            }
        }
    }

    pub fn quit(&mut self) {
        if self.is_running() {
            info!("player quit with score {}", self.score);
            self.status = Status::Quit;
        }
    }

    /// Ends a running game after a failure outside the simulation.
    pub fn abort(&mut self) {
        if self.is_running() {
            warn!("game aborted with score {}", self.score);
            self.status = Status::Collision;
        }
    }

    pub fn change_direction(&mut self, dir: Direction) {
        if !self.is_running() {
            return;
        }

        if !self.snake.set_direction(dir) {
            debug!("ignored reversal to {:?}", dir);
        }
    }

    /// Advances the simulation by one tick.
    pub fn update(&mut self) {
        if !self.is_running() {
            return;
        }

        let next = self.snake.next_head_position();

        if !self.board.is_inside(next) {
            self.crash("wall", next);
            return;
        }

        // The current tail still counts, even though it would move away this tick.
        if self.snake.occupies(next) {
            self.crash("own body", next);
            return;
        }

        let grow = next == self.board.food();
        if grow {
            self.score += FOOD_REWARD;
            debug!("food eaten at ({}, {}), score {}", next.x, next.y, self.score);
        }

        if let Err(err) = self.snake.advance(grow) {
            warn!("{}", err);
            self.status = Status::Collision;
            return;
        }

        if grow {
            if let Err(err) = self.board.place_food(&self.snake, &mut self.rng) {
                info!("{}, ending game with score {}", err, self.score);
                self.status = Status::Collision;
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let head = self.snake.head();
        let food = self.board.food();

        let cells = self
            .board
            .cells()
            .map(|pos| {
                if pos == food {
                    Cell::Food
                } else if pos == head {
                    Cell::Head
                } else if self.snake.occupies(pos) {
                    Cell::Body
                } else {
                    Cell::Empty
                }
            })
            .collect();

        Snapshot {
            width: self.board.width(),
            height: self.board.height(),
            cells,
            score: self.score,
            status: self.status,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn crash(&mut self, what: &str, at: Position) {
        info!("crashed into {} at ({}, {}), score {}", what, at.x, at.y, self.score);
        self.status = Status::Collision;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn game(width: i32, height: i32, head: Position, dir: Direction, len: i32, food: Position) -> SnakeGame {
        let mut board = Board::new(width, height).unwrap();
        assert!(board.set_food(food));
        let snake = Snake::new(head, dir, len).unwrap();
        SnakeGame::from_parts(board, snake, 3)
    }

    #[test]
    fn test_new_game_defaults() {
        let game = SnakeGame::with_seed(11).unwrap();
        assert_eq!(game.status(), Status::Running);
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), INITIAL_SNAKE_LENGTH as usize);
        assert_eq!(game.snake().head(), Position::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2));
        assert_eq!(game.snake().direction(), Right);
        assert!(game.board().is_inside(game.board().food()));
        assert!(!game.snake().occupies(game.board().food()));
    }

    #[test]
    fn test_plain_move() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.update();
        assert_eq!(g.snake().head(), Position::new(5, 4));
        assert_eq!(g.snake().len(), 3);
        assert_eq!(g.score(), 0);
        assert!(g.is_running());
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(5, 4));
        g.update();
        assert_eq!(g.score(), FOOD_REWARD);
        assert_eq!(g.snake().len(), 4);
        assert_ne!(g.board().food(), Position::new(5, 4));
        assert!(!g.snake().occupies(g.board().food()));
    }

    #[test]
    fn test_score_never_decreases() {
        let mut g = game(20, 3, Position::new(2, 1), Right, 2, Position::new(3, 1));
        let mut last = g.score();
        for _ in 0..30 {
            let food = g.board().food();
            g.update();
            assert!(g.score() >= last);
            if g.snake().head() == food {
                assert_eq!(g.score(), last + FOOD_REWARD);
            }
            last = g.score();
        }
    }

    #[test]
    fn test_wall_collision_stops_simulation() {
        let mut g = game(5, 5, Position::new(4, 2), Right, 2, Position::new(0, 0));
        g.update();
        assert_eq!(g.status(), Status::Collision);
        assert_eq!(g.snake().head(), Position::new(4, 2));
    }

    #[test]
    fn test_self_collision() {
        // Head at (4, 2) with body trailing left; turning back through the body.
        let mut g = game(10, 10, Position::new(4, 2), Right, 5, Position::new(9, 9));
        g.change_direction(Down);
        g.update();
        g.change_direction(Left);
        g.update();
        g.change_direction(Up);
        g.update();
        assert_eq!(g.status(), Status::Collision);
    }

    #[test]
    fn test_moving_onto_current_tail_is_fatal() {
        // A 4-long snake curled into a square: the next cell is the tail.
        let mut g = game(10, 10, Position::new(5, 5), Right, 4, Position::new(9, 9));
        g.change_direction(Down);
        g.update();
        g.change_direction(Left);
        g.update();
        g.change_direction(Up);
        let tail = g.snake().tail();
        assert_eq!(g.snake().next_head_position(), tail);
        g.update();
        assert_eq!(g.status(), Status::Collision);
    }

    #[test]
    fn test_reversal_ignored_by_game() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.change_direction(Left);
        g.update();
        assert_eq!(g.snake().head(), Position::new(5, 4));
        assert!(g.is_running());
    }

    #[test]
    fn test_quit_is_immediate_and_final() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.apply(Action::Quit);
        assert_eq!(g.status(), Status::Quit);

        g.update();
        g.apply(Action::TurnDown);
        assert_eq!(g.snake().head(), Position::new(4, 4));
        assert_eq!(g.snake().direction(), Right);
        assert_eq!(g.status(), Status::Quit);
    }

    #[test]
    fn test_quit_after_collision_keeps_collision() {
        let mut g = game(5, 5, Position::new(4, 2), Right, 2, Position::new(0, 0));
        g.update();
        g.quit();
        assert_eq!(g.status(), Status::Collision);
    }

    #[test]
    fn test_abort_ends_only_running_games() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.abort();
        assert_eq!(g.status(), Status::Collision);
        g.update();
        assert_eq!(g.snake().head(), Position::new(4, 4));

        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.quit();
        g.abort();
        assert_eq!(g.status(), Status::Quit);
    }

    #[test]
    fn test_apply_turns() {
        let mut g = game(10, 10, Position::new(4, 4), Right, 3, Position::new(0, 9));
        g.apply(Action::TurnUp);
        assert_eq!(g.snake().direction(), Up);
        g.apply(Action::None);
        assert_eq!(g.snake().direction(), Up);
        g.apply(Action::TurnRight);
        assert_eq!(g.snake().direction(), Right);
    }

    #[test]
    fn test_filling_the_board_ends_game() {
        let mut g = game(3, 1, Position::new(1, 0), Right, 2, Position::new(2, 0));
        g.update();
        assert_eq!(g.score(), FOOD_REWARD);
        assert_eq!(g.snake().len(), 3);
        assert_eq!(g.status(), Status::Collision);
    }

    #[test]
    fn test_snapshot_symbols() {
        let g = game(5, 2, Position::new(2, 0), Right, 3, Position::new(4, 1));
        let snap = g.snapshot();
        let rows: Vec<String> = snap.rows().map(|row| row.iter().map(|c| c.symbol()).collect()).collect();
        assert_eq!(rows, vec!["ooO  ".to_string(), "    *".to_string()]);
        assert_eq!(snap.score(), 0);
        assert_eq!(snap.status(), Status::Running);
    }

    #[test]
    fn test_snapshot_rows_cover_board() {
        for (w, h) in [(1, 1), (7, 3), (BOARD_WIDTH, BOARD_HEIGHT)] {
            let g = game(w, h, Position::new(0, 0), Down, 1, Position::new(w - 1, h - 1));
            let snap = g.snapshot();
            assert_eq!((snap.width(), snap.height()), (w, h));
            assert_eq!(snap.cells().len(), (w * h) as usize);
            assert_eq!(snap.rows().count(), h as usize);
            assert!(snap.rows().all(|row| row.len() == w as usize));
        }
    }

    #[test]
    fn test_snapshot_food_wins_over_snake() {
        let g = game(5, 1, Position::new(2, 0), Right, 3, Position::new(1, 0));
        let snap = g.snapshot();
        assert_eq!(snap.cells(), &[Cell::Body, Cell::Food, Cell::Head, Cell::Empty, Cell::Empty]);
    }

    #[test]
    fn test_final_messages() {
        assert_eq!(Status::Running.final_message(5), None);
        assert_eq!(Status::Collision.final_message(30).unwrap(), "Game Over! Final score: 30");
        assert_eq!(Status::Quit.final_message(0).unwrap(), "You quit the game. Final score: 0");
    }
}
