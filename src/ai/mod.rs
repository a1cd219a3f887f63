pub mod eval;
pub mod search;

pub use eval::{EvalBreakdown, EvalWeights, Evaluator};
pub use search::{GreedySelector, MoveSelector, RandomSelector, best_move};
