use std::path::PathBuf;
use std::time::Duration;

use evaluation::Thresholds;

use crate::args::Args;

#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub engine_path: PathBuf,
    pub engine_args: Vec<String>,
    pub move_time: Duration,
    pub grace: Duration,
    pub thresholds: Thresholds,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            engine_path: PathBuf::from("stockfish"),
            engine_args: Vec::new(),
            move_time: Duration::from_millis(100),
            grace: Duration::from_millis(2000),
            thresholds: Thresholds::default(),
        }
    }
}

impl From<&Args> for InsightConfig {
    fn from(args: &Args) -> Self {
        Self {
            engine_path: args.engine.clone(),
            engine_args: args.engine_args.clone(),
            move_time: Duration::from_millis(args.movetime),
            grace: Duration::from_millis(args.grace),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_cli_defaults() {
        let args = Args::parse_from(["insight", "8/8/8/8/8/8/8/K6k w - - 0 1"]);
        let from_args = InsightConfig::from(&args);
        let default = InsightConfig::default();

        assert_eq!(from_args.engine_path, default.engine_path);
        assert_eq!(from_args.move_time, default.move_time);
        assert_eq!(from_args.grace, default.grace);
        assert_eq!(from_args.thresholds, default.thresholds);
    }
}
