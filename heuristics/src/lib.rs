mod exchange;
mod pins;
mod pst;
mod trapped;

pub use exchange::{is_unfavorable, loses_exchange};
pub use pins::{PinKind, PinRecord, PinnedPieces};
pub use pst::{table, tables, PieceSquareTables};
pub use trapped::TrappedPieces;

use cozy_chess::Color;

/// A positional detector that can justify an evaluation in plain sentences.
///
/// Detectors are built from a snapshot and never mutate it, so calling
/// `explanations` twice yields the same lines.
pub trait Heuristic {
    fn name(&self) -> &'static str;

    /// Lines supporting `favored` (or every finding when `None`), in a stable order.
    fn explanations(&self, favored: Option<Color>) -> Vec<String>;
}
