pub mod def;
pub mod error;
pub mod scores;

pub use def::Evaluator;
pub use error::EvaluationError;
pub use scores::{Advantage, AdvantageVerdict, Thresholds, MATE_SCORE};
