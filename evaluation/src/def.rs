// The evaluator is an outside oracle: the heuristics never score positions themselves,
// they only explain a score handed to them. Implementations live elsewhere
// (`uci` drives an external engine process).

use std::time::Duration;

use cozy_chess::Board;

use crate::EvaluationError;

pub trait Evaluator {
    fn name(&self) -> String;
    /// Evaluate position from White's perspective in centipawns. Positive = White advantage.
    /// Mates are reported as +/- `MATE_SCORE`.
    fn evaluate(&mut self, board: &Board, budget: Duration) -> Result<i32, EvaluationError>;
}
