use std::path::PathBuf;
use std::time::Duration;

use cozy_chess::Board;
use evaluation::{EvaluationError, Evaluator, MATE_SCORE};
use log::info;
use utils::white_relative;

use super::commands::Score;
use super::engine::EngineProcess;

/// Scores positions with an external UCI engine, one process per call.
pub struct UciEvaluator {
    path: PathBuf,
    args: Vec<String>,
    grace: Duration,
}

impl UciEvaluator {
    /// `grace` is added on top of the search budget to cover startup and the handshake.
    pub fn new(path: PathBuf, args: Vec<String>, grace: Duration) -> Self {
        Self { path, args, grace }
    }
}

impl Evaluator for UciEvaluator {
    fn name(&self) -> String {
        format!("UCI {}", self.path.display())
    }

    fn evaluate(&mut self, board: &Board, budget: Duration) -> Result<i32, EvaluationError> {
        let mut engine = EngineProcess::spawn(&self.path, &self.args, budget + self.grace)?;
        engine.handshake()?;

        let score = engine.analyse(&board.to_string(), budget)?;
        let cp = white_relative(board, to_centipawns(score));
        info!("{} scored {} as {}", self.name(), board, cp);
        Ok(cp)
    }
}

/// Mate in any number of moves collapses to the mate sentinel. `mate 0` means
/// the side to move is already mated.
pub fn to_centipawns(score: Score) -> i32 {
    match score {
        Score::Centipawns(cp) => cp.clamp(-MATE_SCORE, MATE_SCORE),
        Score::Mate(moves) if moves > 0 => MATE_SCORE,
        Score::Mate(_) => -MATE_SCORE,
    }
}
