use cozy_chess::{Board, Color};

/// Flip a side-to-move relative score to White's point of view.
#[inline(always)]
pub fn white_relative(board: &Board, score: i32) -> i32 {
    if board.side_to_move() == Color::White {
        score
    } else {
        -score
    }
}
