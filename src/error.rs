use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnakeError {
    #[error("snake length must be positive, got {0}")]
    InvalidLength(i32),
    #[error("snake body starting at x = {0} runs past the coordinate range")]
    OutOfRange(i32),
    #[error("out of memory while growing the snake body")]
    OutOfMemory,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    /// Every cell is covered by the snake, food has nowhere to go.
    #[error("no free cell left for food")]
    Full,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Snake(#[from] SnakeError),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Failure to set up or drive the terminal surface.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("failed to enable raw mode: {0}")]
    RawMode(#[source] std::io::Error),
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
