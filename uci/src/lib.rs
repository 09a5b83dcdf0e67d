mod decoder;
mod encoder;
mod engine;
mod evaluator;

pub mod commands;

pub use commands::{EngineCommand, EngineReply, Info, Score};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use engine::EngineProcess;
pub use evaluator::UciEvaluator;
