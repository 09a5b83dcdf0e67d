use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "insight")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explain who is better in a chess position, and why")]
pub struct Args {
    /// Position to explain, as FEN.
    pub fen: String,

    /// UCI engine used to score the position.
    #[arg(short, long, default_value = "stockfish")]
    pub engine: PathBuf,

    /// Extra argument passed to the engine (repeatable).
    #[arg(long = "engine-arg", allow_hyphen_values = true)]
    pub engine_args: Vec<String>,

    /// Search time in milliseconds.
    #[arg(short, long, default_value_t = 100)]
    pub movetime: u64,

    /// Time on top of the search allowed for engine startup, in milliseconds.
    #[arg(long, default_value_t = 2000)]
    pub grace: u64,

    /// Skip the engine and list every heuristic finding.
    #[arg(long)]
    pub heuristics_only: bool,

    /// Write debug logs, including engine traffic, to a file.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["insight", "8/8/8/8/8/8/8/K6k w - - 0 1"]);
        assert_eq!(args.fen, "8/8/8/8/8/8/8/K6k w - - 0 1");
        assert_eq!(args.engine, PathBuf::from("stockfish"));
        assert_eq!(args.movetime, 100);
        assert!(!args.heuristics_only);
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_engine_options() {
        let args = Args::parse_from([
            "insight",
            "--engine",
            "/opt/sf",
            "--engine-arg",
            "--threads=1",
            "--movetime",
            "250",
            "--heuristics-only",
            "8/8/8/8/8/8/8/K6k w - - 0 1",
        ]);
        assert_eq!(args.engine, PathBuf::from("/opt/sf"));
        assert_eq!(args.engine_args, vec!["--threads=1".to_string()]);
        assert_eq!(args.movetime, 250);
        assert!(args.heuristics_only);
    }
}
