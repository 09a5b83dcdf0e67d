use super::commands::EngineCommand;

pub struct Encoder;

impl Encoder {
    pub fn encode(&self, command: &EngineCommand) -> String {
        match command {
            EngineCommand::Uci => "uci".to_string(),
            EngineCommand::IsReady => "isready".to_string(),
            EngineCommand::Position { fen } => format!("position fen {}", fen),
            EngineCommand::Go { move_time } => format!("go movetime {}", move_time),
            EngineCommand::Quit => "quit".to_string(),
        }
    }
}
