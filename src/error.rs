//! Error types for the session and JS-facing layers.
//!
//! The rules engine itself signals illegal moves with `false`/`None`; these
//! errors only appear where a caller drives a game through `GameSession`
//! or hands the engine external input.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("it is not {expected}'s turn")]
    NotYourTurn { expected: &'static str },

    #[error("{side} has no legal moves")]
    NoLegalMoves { side: &'static str },

    #[error("cannot pass while legal moves remain")]
    MustMove,

    #[error("move selector failed: {0}")]
    SelectorFailed(String),

    #[error("invalid evaluation weights: {0}")]
    InvalidWeights(String),

    #[error("invalid board: {0}")]
    InvalidBoard(String),

    #[error("invalid player code {0} (expected 1=black or 2=white)")]
    InvalidPlayer(u8),
}

pub type Result<T> = std::result::Result<T, GameError>;
