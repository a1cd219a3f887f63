use serde::Serialize;

use crate::board::{Board, Cell, PieceCount, Position};
use crate::rules;
use crate::types::GameResult;

/// What the side to move has to do next, as decided by `GameState::resolve_turn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnOutcome {
    /// `player` has at least one legal move.
    Continue { player: Cell },
    /// `passed` had no move; the turn went to `next`.
    Passed { passed: Cell, next: Cell },
    /// Neither side can move.
    GameOver { result: GameResult },
}

/// Live game: the board plus the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Cell,
    last_flipped: Vec<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Cell::Black,
            last_flipped: Vec::new(),
        }
    }

    /// Starts from an arbitrary position. `current_player` must be a colour;
    /// `Cell::Empty` falls back to Black.
    pub fn from_board(board: Board, current_player: Cell) -> Self {
        Self {
            board,
            current_player: if current_player.is_stone() {
                current_player
            } else {
                Cell::Black
            },
            last_flipped: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Cell {
        self.current_player
    }

    /// Stones flipped by the most recent successful move; empty after a pass.
    pub fn last_flipped(&self) -> &[Position] {
        &self.last_flipped
    }

    /// Places `player` at `pos`, flips the captured stones and hands the
    /// turn to the opponent. Returns `false` and changes nothing when the
    /// move is illegal.
    pub fn make_move(&mut self, pos: Position, player: Cell) -> bool {
        let flips = rules::apply(&mut self.board, pos, player);
        if flips.is_empty() {
            return false;
        }

        self.last_flipped = flips;
        self.current_player = player.opponent();
        true
    }

    pub fn legal_moves(&self, player: Cell) -> Vec<Position> {
        rules::legal_moves(&self.board, player)
    }

    pub fn has_legal_moves(&self, player: Cell) -> bool {
        !self.legal_moves(player).is_empty()
    }

    pub fn count_pieces(&self) -> PieceCount {
        self.board.count()
    }

    /// True when neither colour has a legal move, regardless of whose turn it is.
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Cell::Black) && !self.has_legal_moves(Cell::White)
    }

    /// Hands the turn to the opponent without placing a stone.
    pub fn pass(&mut self) {
        self.last_flipped.clear();
        self.current_player = self.current_player.opponent();
    }

    /// Applies the pass rule for the side to move: passes when only the
    /// opponent can move, reports game over when nobody can.
    pub fn resolve_turn(&mut self) -> TurnOutcome {
        if self.is_terminal() {
            return TurnOutcome::GameOver {
                result: self.result(),
            };
        }

        let player = self.current_player;
        if self.has_legal_moves(player) {
            return TurnOutcome::Continue { player };
        }

        self.pass();
        TurnOutcome::Passed {
            passed: player,
            next: self.current_player,
        }
    }

    pub fn result(&self) -> GameResult {
        GameResult::from_count(self.count_pieces())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
