use cozy_chess::{BitBoard, Color, Piece, Square};
use log::{debug, warn};
use utils::{color_name, exchange_value, is_slider, piece_name, Snapshot};

use crate::Heuristic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinKind {
    /// The shielded piece is the king: moving the pinned piece is illegal.
    Absolute,
    /// The shielded piece is merely worth more than the pinned one.
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRecord {
    pub pinned: Square,
    pub shielded: Square,
    pub pinner: Square,
    pub kind: PinKind,
}

/// A pin is a piece that cannot move without exposing a more valuable piece
/// behind it to the slider attacking it.
///
/// <https://www.chessprogramming.org/Pin>
pub struct PinnedPieces {
    snapshot: Snapshot,
}

impl PinnedPieces {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// Absolute pins followed by relative pins.
    pub fn pins(&self) -> Vec<PinRecord> {
        let mut pins = self.absolute_pins();
        pins.extend(self.relative_pins());
        pins
    }

    /// Pieces shielding their own king, Black's first.
    pub fn absolute_pins(&self) -> Vec<PinRecord> {
        let mut pins = Vec::new();

        for color in [Color::Black, Color::White] {
            let Some(king) = self.snapshot.king(color) else {
                continue;
            };

            for square in self.snapshot.colors(color) {
                let Some(ray) = self.snapshot.pin_ray(color, square) else {
                    continue;
                };

                match self.pinner_on_ray(color, square, king, ray) {
                    Some(pinner) => pins.push(PinRecord {
                        pinned: square,
                        shielded: king,
                        pinner,
                        kind: PinKind::Absolute,
                    }),
                    None => warn!("Pin on {} has no slider behind it, skipping", square),
                }
            }
        }

        pins
    }

    /// Of the enemy pieces on the pin ray, the one nearest the pinned piece on the
    /// far side from the king.
    fn pinner_on_ray(
        &self,
        color: Color,
        pinned: Square,
        king: Square,
        ray: BitBoard,
    ) -> Option<Square> {
        let candidates = ray & self.snapshot.colors(!color) & !self.snapshot.pieces(Piece::Pawn);

        let pinner = if candidates.len() == 1 {
            candidates.next_square()?
        } else {
            let pinned_idx = pinned as i32;
            let king_above = king as i32 > pinned_idx;
            candidates
                .into_iter()
                .filter(|&sq| {
                    if king_above {
                        (sq as i32) < pinned_idx
                    } else {
                        (sq as i32) > pinned_idx
                    }
                })
                .min_by_key(|&sq| (sq as i32 - pinned_idx).abs())?
        };

        let piece = self.snapshot.piece_on(pinner)?;
        is_slider(piece).then_some(pinner)
    }

    /// Pieces that, if lifted, would let an enemy slider hit something worth more.
    ///
    /// Kings and queens are never reported as the pinned piece. An exposed king is
    /// left to `absolute_pins`.
    pub fn relative_pins(&self) -> Vec<PinRecord> {
        let mut pins = Vec::new();

        let candidates = self.snapshot.occupied()
            & !self.snapshot.pieces(Piece::King)
            & !self.snapshot.pieces(Piece::Queen);

        for square in candidates {
            let (Some(piece), Some(color)) =
                (self.snapshot.piece_on(square), self.snapshot.color_on(square))
            else {
                continue;
            };
            let value = exchange_value(piece);
            let lifted = self.snapshot.without(square);

            let sliders = self.snapshot.attackers(!color, square) & self.snapshot.sliders(!color);
            for attacker in sliders {
                let before = valuable_targets(&self.snapshot, attacker, color, value);
                let after = valuable_targets(&lifted, attacker, color, value);

                for exposed in after & !before {
                    if lifted.piece_on(exposed) == Some(Piece::King) {
                        continue;
                    }
                    debug!(
                        "{} on {} shields {} from {}",
                        piece_name(piece),
                        square,
                        exposed,
                        attacker
                    );
                    pins.push(PinRecord {
                        pinned: square,
                        shielded: exposed,
                        pinner: attacker,
                        kind: PinKind::Relative,
                    });
                }
            }
        }

        pins
    }

    fn describe(&self, pin: &PinRecord) -> Option<String> {
        let color = self.snapshot.color_on(pin.pinned)?;
        let pinned = self.snapshot.piece_on(pin.pinned)?;
        let shielded = self.snapshot.piece_on(pin.shielded)?;
        let pinner = self.snapshot.piece_on(pin.pinner)?;

        Some(format!(
            "{} {} at {} is pinned to its {} at {} by the opponent's {} at {}.",
            color_name(color),
            piece_name(pinned),
            pin.pinned,
            piece_name(shielded),
            pin.shielded,
            piece_name(pinner),
            pin.pinner
        ))
    }
}

/// `color` pieces hit by the slider on `attacker` that are worth more than `value`.
fn valuable_targets(snapshot: &Snapshot, attacker: Square, color: Color, value: u32) -> BitBoard {
    let mut targets = BitBoard::EMPTY;
    for sq in snapshot.attacks(attacker) & snapshot.colors(color) {
        if snapshot
            .piece_on(sq)
            .is_some_and(|piece| exchange_value(piece) > value)
        {
            targets |= sq.bitboard();
        }
    }
    targets
}

impl Heuristic for PinnedPieces {
    fn name(&self) -> &'static str {
        "Pinned pieces"
    }

    /// A pin hurts the pinned side, so with a favored side only the other side's
    /// pinned pieces are listed.
    fn explanations(&self, favored: Option<Color>) -> Vec<String> {
        self.pins()
            .iter()
            .filter(|pin| {
                favored.is_none() || self.snapshot.color_on(pin.pinned) == favored.map(|side| !side)
            })
            .filter_map(|pin| self.describe(pin))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::{get_line_rays, Board};

    const PIN_FEN: &str = "1rk5/8/4n3/5B2/1N6/8/8/1Q1K4 b - - 0 1";

    fn pinned(fen: &str) -> PinnedPieces {
        let board: Board = fen.parse().unwrap();
        PinnedPieces::new(Snapshot::new(&board))
    }

    fn assert_well_formed(pp: &PinnedPieces, pin: &PinRecord) {
        let line = get_line_rays(pin.pinned, pin.pinner);
        assert!(line.has(pin.shielded), "{:?} is not colinear", pin);

        let pinned_color = pp.snapshot.color_on(pin.pinned).unwrap();
        assert_eq!(pp.snapshot.color_on(pin.pinner), Some(!pinned_color));
        assert_eq!(pp.snapshot.color_on(pin.shielded), Some(pinned_color));
        assert!(is_slider(pp.snapshot.piece_on(pin.pinner).unwrap()));
    }

    #[test]
    fn test_absolute_pin_squares() {
        let pp = pinned(PIN_FEN);
        let pins = pp.absolute_pins();
        assert_eq!(
            pins,
            vec![PinRecord {
                pinned: Square::E6,
                shielded: Square::C8,
                pinner: Square::F5,
                kind: PinKind::Absolute,
            }]
        );
        assert_well_formed(&pp, &pins[0]);
    }

    #[test]
    fn test_absolute_pin_explanation() {
        let pp = pinned(PIN_FEN);
        let explanations = pp.explanations(Some(Color::White));
        assert_eq!(
            explanations,
            vec!["Black Knight at e6 is pinned to its King at c8 by the opponent's Bishop at f5."]
        );
    }

    #[test]
    fn test_relative_pin_to_queen() {
        let pp = pinned(PIN_FEN);
        assert_eq!(
            pp.relative_pins(),
            vec![PinRecord {
                pinned: Square::B4,
                shielded: Square::B1,
                pinner: Square::B8,
                kind: PinKind::Relative,
            }]
        );
        assert_eq!(
            pp.explanations(Some(Color::Black)),
            vec!["White Knight at b4 is pinned to its Queen at b1 by the opponent's Rook at b8."]
        );
    }

    #[test]
    fn test_unfiltered_lists_absolute_first() {
        let pp = pinned(PIN_FEN);
        let explanations = pp.explanations(None);
        assert_eq!(explanations.len(), 2);
        assert!(explanations[0].starts_with("Black Knight at e6"));
        assert!(explanations[1].starts_with("White Knight at b4"));
    }

    #[test]
    fn test_rook_pins_knight_to_queen() {
        let pp = pinned("q3k3/8/8/n7/8/8/8/R3K3 w - - 0 1");
        let pins = pp.pins();
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].pinned, Square::A5);
        assert_eq!(pins[0].shielded, Square::A8);
        assert_eq!(pins[0].pinner, Square::A1);
        assert_eq!(pins[0].kind, PinKind::Relative);
        assert_well_formed(&pp, &pins[0]);
    }

    #[test]
    fn test_no_pin_onto_cheaper_piece() {
        // Knight in front of a pawn is not pinned
        let pp = pinned("4k3/p7/8/n7/8/8/8/R3K3 w - - 0 1");
        assert!(pp.relative_pins().is_empty());
    }

    #[test]
    fn test_no_pins_in_starting_position() {
        let pp = pinned("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(pp.pins().is_empty());
    }

    #[test]
    fn test_two_blockers_is_not_a_pin() {
        let pp = pinned("4k3/8/8/8/rn1B3K/8/8/8 w - - 0 1");
        assert!(pp.absolute_pins().is_empty());
    }

    #[test]
    fn test_nearest_pinner_is_chosen() {
        // King above the pinned bishop: look towards lower squares
        let pp = pinned("4k3/8/8/8/rr1B3K/8/8/8 w - - 0 1");
        let pins = pp.absolute_pins();
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].pinner, Square::B4);
        assert_well_formed(&pp, &pins[0]);

        // King below: look towards higher squares
        let pp = pinned("4k3/8/8/8/K2B1r1r/8/8/8 w - - 0 1");
        let pins = pp.absolute_pins();
        assert_eq!(pins.len(), 1);
        assert_eq!(pins[0].pinner, Square::F4);
        assert_well_formed(&pp, &pins[0]);
    }

    #[test]
    fn test_idempotent() {
        let pp = pinned(PIN_FEN);
        assert_eq!(pp.explanations(None), pp.explanations(None));
        assert_eq!(pp.pins(), pp.pins());
    }
}
