use serde::Serialize;

use crate::board::{Cell, PieceCount, Position};

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// Row-major cell codes: 0=empty, 1=black, 2=white.
    pub cells: Vec<u8>,
    pub current_player: Cell,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    /// Contract:
    /// - Normal move: stones flipped by the last move.
    /// - Pass or fresh game: empty list.
    pub last_flipped: Vec<Position>,
    /// Legal moves of the side to move, row-major.
    pub legal_moves: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// `None` on a draw.
    pub winner: Option<Cell>,
    pub black: u8,
    pub white: u8,
}

impl GameResult {
    pub fn from_count(count: PieceCount) -> Self {
        let winner = if count.black > count.white {
            Some(Cell::Black)
        } else if count.white > count.black {
            Some(Cell::White)
        } else {
            None
        };
        Self {
            winner,
            black: count.black,
            white: count.white,
        }
    }
}

/// Summary of one computer move selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchReport {
    pub position: Position,
    pub score: i32,
    pub candidates: usize,
    pub elapsed_ms: f64,
}
