use super::commands::{EngineReply, Info, Score};

pub struct Decoder;

impl Decoder {
    pub fn decode(&self, input: &str) -> EngineReply {
        let input = input.trim();
        match input {
            "uciok" => EngineReply::UciOk,
            "readyok" => EngineReply::ReadyOk,

            _ if input.starts_with("bestmove") => self.decode_bestmove(input),
            _ if input.starts_with("info") => self.decode_info(input),

            _ => EngineReply::Other(input.to_string()),
        }
    }

    fn decode_bestmove(&self, input: &str) -> EngineReply {
        // "bestmove (none)" is sent from mated or stalemated positions
        let mv = input.split_whitespace().nth(1).unwrap_or("(none)");
        EngineReply::BestMove(mv.to_string())
    }

    fn decode_info(&self, input: &str) -> EngineReply {
        // Everything after `string` is free text
        let tokens: Vec<&str> = input
            .split_whitespace()
            .take_while(|&t| t != "string")
            .collect();

        let score = match tokens.iter().position(|&t| t == "score") {
            None => None,
            Some(at) => {
                let kind = tokens.get(at + 1).copied();
                let value = tokens.get(at + 2).and_then(|v| v.parse::<i32>().ok());
                match (kind, value) {
                    (Some("cp"), Some(cp)) => Some(Score::Centipawns(cp)),
                    (Some("mate"), Some(moves)) => Some(Score::Mate(moves)),
                    _ => return EngineReply::Malformed(input.to_string()),
                }
            }
        };

        EngineReply::Info(Info {
            depth: extract_numeric_param(&tokens, "depth"),
            score,
        })
    }
}

fn extract_numeric_param(tokens: &[&str], param: &str) -> Option<u32> {
    tokens
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}
