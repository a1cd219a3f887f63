use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use web_time::Instant;

use crate::ai::eval::Evaluator;
use crate::board::{Board, Cell, Position};
use crate::rules;
use crate::types::SearchReport;

/// Picks a move for `player`. Implementations must return one of
/// `rules::legal_moves(board, player)`, or `None` when that list is empty.
pub trait MoveSelector {
    fn select_move(&mut self, board: &Board, player: Cell) -> Option<Position>;

    /// Details of the most recent selection, if the selector keeps them.
    fn last_report(&self) -> Option<SearchReport> {
        None
    }
}

/// One-ply greedy search: plays every legal move on a scratch board and
/// keeps the best evaluation. Ties go to the earliest move in row-major order.
#[derive(Debug, Clone, Default)]
pub struct GreedySelector {
    evaluator: Evaluator,
    last: Option<SearchReport>,
}

impl GreedySelector {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            last: None,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Score of playing `pos`, including the early-game flip penalty.
    /// `None` when the move is illegal.
    pub fn score_move(&self, board: &Board, pos: Position, player: Cell) -> Option<i32> {
        let (next, flipped) = rules::simulate(board, pos, player);
        if flipped == 0 {
            return None;
        }

        let weights = self.evaluator.weights();
        let mut score = self.evaluator.evaluate(&next, player);
        if board.count().total() < weights.early_game_pieces {
            score -= flipped as i32 * weights.early_flip_penalty;
        }
        Some(score)
    }

    pub fn search(&self, board: &Board, player: Cell) -> Option<SearchReport> {
        let start = Instant::now();
        let moves = rules::legal_moves(board, player);

        let mut best: Option<(Position, i32)> = None;
        for &mv in &moves {
            let Some(score) = self.score_move(board, mv, player) else {
                continue;
            };
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        best.map(|(position, score)| SearchReport {
            position,
            score,
            candidates: moves.len(),
            elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        })
    }
}

impl MoveSelector for GreedySelector {
    fn select_move(&mut self, board: &Board, player: Cell) -> Option<Position> {
        let report = self.search(board, player);
        if let Some(r) = &report {
            log::debug!(
                "greedy selector chose {} (score {}, {} candidates, {:.3} ms)",
                r.position,
                r.score,
                r.candidates,
                r.elapsed_ms
            );
        }
        self.last = report;
        report.map(|r| r.position)
    }

    fn last_report(&self) -> Option<SearchReport> {
        self.last
    }
}

/// Uniformly random legal move from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: SmallRng,
}

impl RandomSelector {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board, player: Cell) -> Option<Position> {
        let moves = rules::legal_moves(board, player);
        if moves.is_empty() {
            return None;
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        log::debug!("random selector chose {mv} of {} candidates", moves.len());
        Some(mv)
    }
}

/// Best move for `player` under the default evaluation weights.
pub fn best_move(board: &Board, player: Cell) -> Option<Position> {
    GreedySelector::default()
        .search(board, player)
        .map(|r| r.position)
}
