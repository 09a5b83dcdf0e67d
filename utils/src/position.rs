use std::str::FromStr;

use cozy_chess::Board;
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid position \"{fen}\": {reason}")]
    InvalidFen { fen: String, reason: String },
}

/// Parses a FEN string into a board. No analysis should run on anything that fails here.
pub fn load_position(fen: &str) -> Result<Board, PositionError> {
    let fen = fen.trim();
    let board = Board::from_str(fen).map_err(|e| PositionError::InvalidFen {
        fen: fen.to_string(),
        reason: format!("{:?}", e),
    })?;

    debug!("Loaded position: {}", board);
    Ok(board)
}
