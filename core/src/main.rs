mod args;
mod config;
mod insights;

use std::error::Error;
use std::fs::File;

use args::Args;
use clap::Parser;
use config::InsightConfig;
use log::{debug, LevelFilter};
use simplelog::{Config, SimpleLogger, WriteLogger};
use uci::UciEvaluator;
use utils::load_position;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;
    let config = InsightConfig::from(&args);
    debug!("Using {:?}", config);

    if args.heuristics_only {
        let board = load_position(&args.fen)?;
        for section in insights::analyze_heuristics(&board) {
            println!("{}:", section.name);
            for line in section.lines {
                println!("  {}", line);
            }
        }
        return Ok(());
    }

    let mut evaluator = UciEvaluator::new(
        config.engine_path.clone(),
        config.engine_args.clone(),
        config.grace,
    );
    for line in insights::explain_fen(&args.fen, &mut evaluator, &config)? {
        println!("{}", line);
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(log_file)?)?;
    } else {
        SimpleLogger::init(level, Config::default())?;
    }

    Ok(args)
}
