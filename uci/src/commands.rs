/// Lines the client writes to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Uci,
    IsReady,
    Position { fen: String },
    Go { move_time: u64 },
    Quit,
}

/// Lines the engine writes back. Anything the client does not act on is `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    UciOk,
    ReadyOk,
    Info(Info),
    BestMove(String),
    /// An `info` line whose score could not be read.
    Malformed(String),
    Other(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Info {
    pub depth: Option<u32>,
    pub score: Option<Score>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Centipawns(i32), // side to move
    Mate(i32),       // Positive for mate-in-n, negative for mated-in-n
}
