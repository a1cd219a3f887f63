//! Engine entry points. The free functions operate on a `GameState` from
//! Rust; `OthelloEngine` is the `wasm-bindgen` wrapper, whose calls return
//! plain data (via `serde-wasm-bindgen`) or a string error and never panic
//! on input.

use wasm_bindgen::prelude::*;

use crate::ai::GreedySelector;
use crate::board::{Cell, PieceCount, Position};
use crate::error::GameError;
use crate::game::GameState;
use crate::session::{GameSession, SessionConfig};

/// Fresh game at the standard opening, Black to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Legal moves of `player` on the live board, row-major.
pub fn legal_moves(state: &GameState, player: Cell) -> Vec<Position> {
    state.legal_moves(player)
}

/// `false` means the move was rejected and `state` is unchanged.
pub fn make_move(state: &mut GameState, pos: Position, player: Cell) -> bool {
    state.make_move(pos, player)
}

/// Greedy choice for `player` under the default weights; `None` means pass.
pub fn best_move(state: &GameState, player: Cell) -> Option<Position> {
    GreedySelector::default()
        .search(state.board(), player)
        .map(|r| r.position)
}

pub fn count_pieces(state: &GameState) -> PieceCount {
    state.count_pieces()
}

pub fn is_terminal(state: &GameState) -> bool {
    state.is_terminal()
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn player_from_code(code: u8) -> Result<Cell, GameError> {
    match Cell::from_code(code) {
        Some(cell) if cell.is_stone() => Ok(cell),
        _ => Err(GameError::InvalidPlayer(code)),
    }
}

#[wasm_bindgen]
pub struct OthelloEngine {
    session: GameSession,
}

#[wasm_bindgen]
impl OthelloEngine {
    /// `config` may be `undefined`/`null` or a partial
    /// `{ selector: { kind: "greedy" | "random", seed }, weights: {...} }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloEngine, JsValue> {
        let config: SessionConfig = if config.is_undefined() || config.is_null() {
            SessionConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self {
            session: GameSession::new(config)?,
        })
    }

    /// Starts a new game under `config` (same rules as the constructor).
    pub fn reset(&mut self, config: JsValue) -> Result<(), JsValue> {
        *self = Self::new(config)?;
        Ok(())
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.snapshot())?)
    }

    pub fn legal_moves(&self, player: u8) -> Result<JsValue, JsValue> {
        let player = player_from_code(player)?;
        Ok(serde_wasm_bindgen::to_value(
            &self.session.state().legal_moves(player),
        )?)
    }

    /// Human move. Rejections come back as `Err`, never as a panic.
    pub fn place(&mut self, row: u8, col: u8) -> Result<JsValue, JsValue> {
        self.session.human_move(row, col)?;
        self.state()
    }

    /// Computer move; returns the chosen position.
    pub fn ai_move(&mut self) -> Result<JsValue, JsValue> {
        let mv = self.session.computer_move()?;
        Ok(serde_wasm_bindgen::to_value(&mv)?)
    }

    /// Suggested move for `player` under the session's weights, or
    /// `undefined` when `player` has to pass. Does not play it.
    pub fn best_move(&self, player: u8) -> Result<JsValue, JsValue> {
        let player = player_from_code(player)?;
        Ok(serde_wasm_bindgen::to_value(
            &self.session.suggest_move(player),
        )?)
    }

    /// Resolves passes/game over; returns `{ kind, ... }`.
    pub fn advance(&mut self) -> Result<JsValue, JsValue> {
        let outcome = self.session.advance();
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    pub fn pass(&mut self) -> Result<(), JsValue> {
        Ok(self.session.pass()?)
    }

    pub fn is_terminal(&self) -> bool {
        self.session.state().is_terminal()
    }

    pub fn count_pieces(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(
            &self.session.state().count_pieces(),
        )?)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.result())?)
    }

    /// Report of the last greedy selection, or `undefined`.
    pub fn last_search(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.last_report())?)
    }

    pub fn evaluate(&self, player: u8) -> Result<JsValue, JsValue> {
        let player = player_from_code(player)?;
        let breakdown = self
            .session
            .evaluator()
            .breakdown(self.session.state().board(), player);
        Ok(serde_wasm_bindgen::to_value(&breakdown)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn free_functions_drive_an_opening_move() {
        let mut state = new_game();

        assert_eq!(legal_moves(&state, Cell::Black).len(), 4);
        assert_eq!(best_move(&state, Cell::Black), Some(at(2, 3)));
        assert!(!make_move(&mut state, at(0, 0), Cell::Black));
        assert!(make_move(&mut state, at(2, 3), Cell::Black));

        assert_eq!(count_pieces(&state), PieceCount { black: 4, white: 1 });
        assert_eq!(state.current_player(), Cell::White);
        assert!(!is_terminal(&state));
    }

    #[test]
    fn best_move_is_none_when_player_must_pass() {
        let mut rows = vec!["WWWWWWWW"; 8];
        rows[0] = ".BWWWWWW";
        let board = crate::board::Board::from_rows(&rows).unwrap();
        let state = GameState::from_board(board, Cell::Black);

        assert_eq!(best_move(&state, Cell::Black), None);
        assert_eq!(best_move(&state, Cell::White), Some(at(0, 0)));
        assert!(!is_terminal(&state));
    }

    #[test]
    fn player_codes_accept_only_colours() {
        assert_eq!(player_from_code(1), Ok(Cell::Black));
        assert_eq!(player_from_code(2), Ok(Cell::White));
        assert_eq!(player_from_code(0), Err(GameError::InvalidPlayer(0)));
        assert_eq!(player_from_code(9), Err(GameError::InvalidPlayer(9)));
    }
}
