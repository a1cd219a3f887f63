use wasm_bindgen::prelude::*;

pub mod ai;
pub mod api;
pub mod board;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;
pub mod types;

pub use api::{best_move, count_pieces, is_terminal, legal_moves, make_move, new_game};
pub use board::{Board, Cell, PieceCount, Position};
pub use error::{GameError, Result};
pub use game::{GameState, TurnOutcome};
pub use session::{GameSession, SelectorKind, SessionConfig};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
