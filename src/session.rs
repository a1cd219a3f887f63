use serde::Deserialize;

use crate::ai::{EvalWeights, Evaluator, GreedySelector, MoveSelector, RandomSelector};
use crate::board::{Cell, Position};
use crate::error::{GameError, Result};
use crate::game::{GameState, TurnOutcome};
use crate::types::{GameResult, GameSnapshot, SearchReport};

pub const HUMAN: Cell = Cell::Black;
pub const COMPUTER: Cell = Cell::White;

/// Which move selector drives the computer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectorKind {
    #[default]
    Greedy,
    Random {
        seed: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub selector: SelectorKind,
    pub weights: EvalWeights,
}

impl SessionConfig {
    fn build_selector(&self, evaluator: Evaluator) -> Box<dyn MoveSelector> {
        match self.selector {
            SelectorKind::Greedy => Box::new(GreedySelector::new(evaluator)),
            SelectorKind::Random { seed } => Box::new(RandomSelector::new(seed)),
        }
    }
}

/// Human (Black) against computer (White).
pub struct GameSession {
    state: GameState,
    evaluator: Evaluator,
    selector: Box<dyn MoveSelector>,
    is_game_over: bool,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Result<Self> {
        let evaluator = Evaluator::new(config.weights)?;
        let selector = config.build_selector(evaluator);
        Ok(Self::with_selector(evaluator, selector))
    }

    pub fn with_selector(evaluator: Evaluator, selector: Box<dyn MoveSelector>) -> Self {
        Self {
            state: GameState::new(),
            evaluator,
            selector,
            is_game_over: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn human_move(&mut self, row: u8, col: u8) -> Result<()> {
        self.ensure_turn(HUMAN, "black")?;
        let pos = Position::new(row, col)?;
        if !self.state.make_move(pos, HUMAN) {
            return Err(GameError::IllegalMove { row, col });
        }
        self.check_game_over();
        Ok(())
    }

    pub fn computer_move(&mut self) -> Result<Position> {
        self.ensure_turn(COMPUTER, "white")?;

        let legal = self.state.legal_moves(COMPUTER);
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves { side: "white" });
        }

        let selected = self
            .selector
            .select_move(self.state.board(), COMPUTER)
            .ok_or_else(|| GameError::SelectorFailed("no move returned".to_string()))?;

        if !legal.contains(&selected) {
            return Err(GameError::SelectorFailed(format!(
                "selected illegal move {selected}"
            )));
        }
        if !self.state.make_move(selected, COMPUTER) {
            return Err(GameError::SelectorFailed(format!(
                "move {selected} was rejected"
            )));
        }
        self.check_game_over();
        Ok(selected)
    }

    /// Explicit pass for the side to move; only allowed without legal moves.
    pub fn pass(&mut self) -> Result<()> {
        self.check_game_over();
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.state.has_legal_moves(self.state.current_player()) {
            return Err(GameError::MustMove);
        }
        self.state.pass();
        Ok(())
    }

    /// Best move for `player` under this session's weights, without playing it.
    pub fn suggest_move(&self, player: Cell) -> Option<SearchReport> {
        GreedySelector::new(self.evaluator).search(self.state.board(), player)
    }

    /// Resolves passes and game over for the side to move.
    /// Call after every move before asking either side for the next one.
    pub fn advance(&mut self) -> TurnOutcome {
        let outcome = self.state.resolve_turn();
        match outcome {
            TurnOutcome::Passed { passed, next } => {
                log::info!("{passed:?} has no legal moves; {next:?} to play");
            }
            TurnOutcome::GameOver { .. } => self.check_game_over(),
            TurnOutcome::Continue { player } => {
                log::trace!("{player:?} to move");
            }
        }
        outcome
    }

    pub fn result(&self) -> GameResult {
        self.state.result()
    }

    pub fn last_report(&self) -> Option<SearchReport> {
        self.selector.last_report()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let count = self.state.count_pieces();
        GameSnapshot {
            cells: self.state.board().to_array().to_vec(),
            current_player: self.state.current_player(),
            black_count: count.black,
            white_count: count.white,
            is_game_over: self.is_game_over,
            last_flipped: self.state.last_flipped().to_vec(),
            legal_moves: self.state.legal_moves(self.state.current_player()),
        }
    }

    /// Marks the session finished once neither side can move.
    fn check_game_over(&mut self) {
        if !self.is_game_over && self.state.is_terminal() {
            let result = self.state.result();
            log::info!(
                "game over: black {} white {} winner {:?}",
                result.black,
                result.white,
                result.winner
            );
            self.is_game_over = true;
        }
    }

    fn ensure_turn(&self, side: Cell, name: &'static str) -> Result<()> {
        if self.is_game_over {
            return Err(GameError::GameOver);
        }
        if self.state.current_player() != side {
            return Err(GameError::NotYourTurn { expected: name });
        }
        Ok(())
    }

    #[cfg(test)]
    fn set_state_for_test(&mut self, state: GameState) {
        self.state = state;
        self.is_game_over = false;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_selector(Evaluator::default(), Box::new(GreedySelector::default()))
    }
}
