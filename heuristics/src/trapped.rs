use cozy_chess::{Color, Piece, Square};
use log::debug;
use utils::{color_name, piece_group_name, Snapshot};

use crate::exchange::is_unfavorable;
use crate::Heuristic;

/// Starting squares where a boxed-in rook or bishop is simply undeveloped.
const HOME_SQUARES: [(Square, Piece, Color); 8] = [
    (Square::A1, Piece::Rook, Color::White),
    (Square::C1, Piece::Bishop, Color::White),
    (Square::F1, Piece::Bishop, Color::White),
    (Square::H1, Piece::Rook, Color::White),
    (Square::A8, Piece::Rook, Color::Black),
    (Square::C8, Piece::Bishop, Color::Black),
    (Square::F8, Piece::Bishop, Color::Black),
    (Square::H8, Piece::Rook, Color::Black),
];

/// A piece is trapped when every square it could go to loses material.
///
/// TODO: knights and queens on their home squares get no development exemption yet.
pub struct TrappedPieces {
    snapshot: Snapshot,
}

impl TrappedPieces {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Trapped non-pawn pieces of `side` (both sides when `None`), in square order.
    pub fn find_trapped(&self, side: Option<Color>) -> Vec<Square> {
        let pieces = match side {
            Some(color) => self.snapshot.colors(color),
            None => self.snapshot.occupied(),
        };

        (pieces & !self.snapshot.pieces(Piece::Pawn))
            .into_iter()
            .filter(|&sq| self.is_trapped(sq))
            .collect()
    }

    pub fn is_trapped(&self, square: Square) -> bool {
        let (Some(piece), Some(color)) =
            (self.snapshot.piece_on(square), self.snapshot.color_on(square))
        else {
            return false;
        };

        let destinations = self.snapshot.attacks(square) & !self.snapshot.colors(color);
        if destinations.is_empty() {
            return !HOME_SQUARES.contains(&(square, piece, color));
        }

        let trapped = destinations
            .into_iter()
            .all(|to| is_unfavorable(&self.snapshot, square, to));
        if trapped {
            debug!(
                "{:?} {:?} on {} has no safe square among {} candidates",
                color,
                piece,
                square,
                destinations.len()
            );
        }
        trapped
    }
}

impl Heuristic for TrappedPieces {
    fn name(&self) -> &'static str {
        "Trapped pieces"
    }

    /// A trapped piece speaks for its opponent, so with a favored side only the
    /// other side's pieces are listed.
    ///
    /// Lines are grouped by piece kind, kinds in the order they are first met.
    fn explanations(&self, favored: Option<Color>) -> Vec<String> {
        let mut groups: Vec<((Color, Piece), Vec<Square>)> = Vec::new();

        for sq in self.find_trapped(favored.map(|side| !side)) {
            let (Some(piece), Some(color)) =
                (self.snapshot.piece_on(sq), self.snapshot.color_on(sq))
            else {
                continue;
            };
            match groups.iter_mut().find(|(kind, _)| *kind == (color, piece)) {
                Some((_, squares)) => squares.push(sq),
                None => groups.push(((color, piece), vec![sq])),
            }
        }

        groups
            .into_iter()
            .flat_map(|((color, piece), squares)| {
                squares.into_iter().map(move |sq| {
                    format!(
                        "{} {} at {} is trapped",
                        color_name(color),
                        piece_group_name(piece),
                        sq
                    )
                })
            })
            .collect()
    }
}
