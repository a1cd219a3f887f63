use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Position};
use crate::error::{GameError, Result};
use crate::rules;

/// Largest accepted magnitude for any single weight. With 64 squares,
/// three per-square terms, mobility, parity and the flip penalty the
/// worst-case score stays well inside `i32`.
pub const MAX_WEIGHT_MAGNITUDE: i32 = 1_000_000;

/// Each corner with its X-square and its two C-squares.
const CORNER_ZONES: [(Position, Position, [Position; 2]); 4] = [
    (
        Position::at(0, 0),
        Position::at(1, 1),
        [Position::at(0, 1), Position::at(1, 0)],
    ),
    (
        Position::at(0, 7),
        Position::at(1, 6),
        [Position::at(0, 6), Position::at(1, 7)],
    ),
    (
        Position::at(7, 0),
        Position::at(6, 1),
        [Position::at(6, 0), Position::at(7, 1)],
    ),
    (
        Position::at(7, 7),
        Position::at(6, 6),
        [Position::at(6, 7), Position::at(7, 6)],
    ),
];

/// Tunable constants of the positional evaluation.
///
/// Only the ordering
/// `corner > edge > center > interior > max(x_square, c_square)` is
/// load-bearing; the literal numbers are heuristics. Missing fields take
/// their default when deserialized from a host-supplied object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub corner: i32,
    /// Diagonal neighbour of a still-empty corner.
    pub x_square: i32,
    /// Orthogonal neighbour of a still-empty corner.
    pub c_square: i32,
    pub edge: i32,
    /// Central 4x4 block.
    pub center: i32,
    pub interior: i32,
    pub stable_corner: i32,
    pub stable_edge: i32,
    pub stable_interior: i32,
    pub unstable: i32,
    pub frontier_exposed: i32,
    pub frontier_enclosed: i32,
    pub mobility: i32,
    pub parity: i32,
    /// Flip penalty applies while the board holds fewer pieces than this.
    pub early_game_pieces: u8,
    pub early_flip_penalty: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            corner: 10000,
            x_square: -700,
            c_square: -500,
            edge: 10,
            center: 3,
            interior: -5,
            stable_corner: 50,
            stable_edge: 20,
            stable_interior: 20,
            unstable: -10,
            frontier_exposed: -5,
            frontier_enclosed: 10,
            mobility: 3,
            parity: 50,
            early_game_pieces: 20,
            early_flip_penalty: 3,
        }
    }
}

impl EvalWeights {
    pub fn validate(&self) -> Result<()> {
        let magnitudes = [
            ("corner", self.corner),
            ("x_square", self.x_square),
            ("c_square", self.c_square),
            ("edge", self.edge),
            ("center", self.center),
            ("interior", self.interior),
            ("stable_corner", self.stable_corner),
            ("stable_edge", self.stable_edge),
            ("stable_interior", self.stable_interior),
            ("unstable", self.unstable),
            ("frontier_exposed", self.frontier_exposed),
            ("frontier_enclosed", self.frontier_enclosed),
            ("mobility", self.mobility),
            ("parity", self.parity),
            ("early_flip_penalty", self.early_flip_penalty),
        ];
        for (name, value) in magnitudes {
            if value.unsigned_abs() > MAX_WEIGHT_MAGNITUDE as u32 {
                return Err(GameError::InvalidWeights(format!(
                    "{name} ({value}) exceeds the limit of {MAX_WEIGHT_MAGNITUDE}"
                )));
            }
        }

        let ordered = [
            ("corner", self.corner),
            ("edge", self.edge),
            ("center", self.center),
            ("interior", self.interior),
            ("x/c square", self.x_square.max(self.c_square)),
        ];
        for pair in ordered.windows(2) {
            let (hi_name, hi) = pair[0];
            let (lo_name, lo) = pair[1];
            if hi <= lo {
                return Err(GameError::InvalidWeights(format!(
                    "{hi_name} ({hi}) must be greater than {lo_name} ({lo})"
                )));
            }
        }
        if self.early_flip_penalty < 0 {
            return Err(GameError::InvalidWeights(format!(
                "early_flip_penalty must be non-negative, got {}",
                self.early_flip_penalty
            )));
        }
        Ok(())
    }
}

/// Per-term contributions to one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EvalBreakdown {
    pub positional: i32,
    pub stability: i32,
    pub frontier: i32,
    pub mobility: i32,
    pub parity: i32,
}

impl EvalBreakdown {
    pub fn total(&self) -> i32 {
        self.positional + self.stability + self.frontier + self.mobility + self.parity
    }
}

/// Static board evaluator. Pure function of `(board, player)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    weights: EvalWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Higher is better for `player`.
    pub fn evaluate(&self, board: &Board, player: Cell) -> i32 {
        self.breakdown(board, player).total()
    }

    pub fn breakdown(&self, board: &Board, player: Cell) -> EvalBreakdown {
        if !player.is_stone() {
            return EvalBreakdown::default();
        }

        let opp = player.opponent();
        let mut out = EvalBreakdown::default();

        for (pos, cell) in board.squares() {
            let sign = if cell == player {
                1
            } else if cell == opp {
                -1
            } else {
                continue;
            };
            out.positional += sign * self.static_value(board, pos);
            out.stability += sign * self.stability(board, pos);
            out.frontier += sign * self.frontier(board, pos);
        }

        let mine = rules::mobility(board, player) as i32;
        let theirs = rules::mobility(board, opp) as i32;
        out.mobility = (mine - theirs) * self.weights.mobility;

        // Tempo proxy: same sign for both colours.
        out.parity = if board.empty_count() % 2 == 1 {
            self.weights.parity
        } else {
            -self.weights.parity
        };

        out
    }

    /// Square value; X/C penalties only apply while their corner is empty.
    pub fn static_value(&self, board: &Board, pos: Position) -> i32 {
        let w = &self.weights;
        if pos.is_corner() {
            return w.corner;
        }

        for (corner, x_square, c_squares) in CORNER_ZONES {
            if board.get(corner) != Cell::Empty {
                continue;
            }
            if pos == x_square {
                return w.x_square;
            }
            if c_squares.contains(&pos) {
                return w.c_square;
            }
        }

        if pos.is_edge() {
            w.edge
        } else if (2..=5).contains(&pos.row) && (2..=5).contains(&pos.col) {
            w.center
        } else {
            w.interior
        }
    }

    fn stability(&self, board: &Board, pos: Position) -> i32 {
        let w = &self.weights;
        if pos.is_corner() {
            w.stable_corner
        } else if pos.is_edge() {
            w.stable_edge
        } else if board.has_empty_neighbor(pos) {
            w.unstable
        } else {
            w.stable_interior
        }
    }

    fn frontier(&self, board: &Board, pos: Position) -> i32 {
        if board.has_empty_neighbor(pos) {
            self.weights.frontier_exposed
        } else {
            self.weights.frontier_enclosed
        }
    }
}
