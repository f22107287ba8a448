use crate::core::square::Square;

/// Errors surfaced by board setup and the programmatic move API.
///
/// Clicks routed through [`GameState::select_square`](crate::game::GameState::select_square)
/// never produce these; they are absorbed by the selection state machine.
#[derive(thiserror::Error, Debug)]
pub enum ChessError {
    /// Coordinates outside 0..=7.
    #[error("square ({rank}, {file}) is off the board")]
    OutOfBounds { rank: i32, file: i32 },

    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid board diagram at line {line}: {reason}")]
    InvalidDiagram { line: usize, reason: String },

    #[error("the piece on {0} does not belong to the side to move")]
    NotYourTurn(Square),

    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChessError>;
