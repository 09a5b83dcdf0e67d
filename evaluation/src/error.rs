use std::io;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("failed to start engine {path}: {source}")]
    Spawn {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("engine i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("engine gave no answer within {0:?}")]
    Timeout(Duration),
    #[error("engine exited before answering")]
    EngineExited,
    #[error("engine finished without reporting a score")]
    MissingScore,
    #[error("unexpected engine reply: {0}")]
    InvalidReply(String),
}
