use cozy_chess::{Color, Piece};
use utils::{color_name, piece_group_name, Snapshot};

use crate::Heuristic;

/// Order in which placement sentences are reported.
const REPORT_ORDER: [Piece; 6] = [
    Piece::Pawn,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
    Piece::Queen,
    Piece::King,
];

/// Compares how well each side's pieces are placed, one piece type at a time.
///
/// Only the square bonuses are compared; material is left out so an extra
/// knight does not read as a better-placed one.
///
/// <https://www.chessprogramming.org/Simplified_Evaluation_Function>
pub struct PieceSquareTables {
    snapshot: Snapshot,
}

impl PieceSquareTables {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }

    /// White's placement score minus Black's for one piece type.
    pub fn piece_eval(&self, piece: Piece) -> i32 {
        let side = |color| -> i32 {
            let pst = table(piece, color);
            self.snapshot
                .colored_pieces(color, piece)
                .into_iter()
                .map(|sq| pst[sq as usize])
                .sum()
        };
        side(Color::White) - side(Color::Black)
    }
}

impl Heuristic for PieceSquareTables {
    fn name(&self) -> &'static str {
        "Piece placement"
    }

    fn explanations(&self, favored: Option<Color>) -> Vec<String> {
        let mut explanations = Vec::new();
        for piece in REPORT_ORDER {
            let eval = self.piece_eval(piece);
            let better = match eval {
                0 => continue,
                e if e > 0 => Color::White,
                _ => Color::Black,
            };
            if favored.is_some_and(|side| side != better) {
                continue;
            }
            explanations.push(format!(
                "{}'s {} is/are placed at better square(s) than {}",
                color_name(better),
                piece_group_name(piece),
                color_name(!better)
            ));
        }
        explanations
    }
}

pub fn table(piece: Piece, color: Color) -> &'static [i32; 64] {
    let tables = match color {
        Color::White => &WHITE_TABLES,
        Color::Black => &BLACK_TABLES,
    };
    tables[piece as usize]
}

/// Every (color, piece) table, White first.
pub fn tables() -> impl Iterator<Item = (Color, Piece, &'static [i32; 64])> {
    Color::ALL.into_iter().flat_map(|color| {
        Piece::ALL
            .into_iter()
            .map(move |piece| (color, piece, table(piece, color)))
    })
}

const WHITE_TABLES: [&[i32; 64]; Piece::NUM] = [
    &WHITE_PAWN_PST,
    &WHITE_KNIGHT_PST,
    &WHITE_BISHOP_PST,
    &WHITE_ROOK_PST,
    &WHITE_QUEEN_PST,
    &WHITE_KING_PST,
];

const BLACK_TABLES: [&[i32; 64]; Piece::NUM] = [
    &BLACK_PAWN_PST,
    &BLACK_KNIGHT_PST,
    &BLACK_BISHOP_PST,
    &BLACK_ROOK_PST,
    &BLACK_QUEEN_PST,
    &BLACK_KING_PST,
];

/// Black's view of a White table: the whole board turned around, a1 <-> h8.
const fn mirror_pst(source: &[i32; 64]) -> [i32; 64] {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        table[i] = source[63 - i];
        i += 1;
    }
    table
}

pub const WHITE_PAWN_PST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 1: a1..h1
    5, 10, 10, -20, -20, 10, 10, 5, // RANK 2
    5, -5, -10, 0, 0, -10, -5, 5, // RANK 3
    0, 0, 0, 20, 20, 0, 0, 0, // RANK 4
    5, 5, 10, 25, 25, 10, 5, 5, // RANK 5
    10, 10, 20, 30, 30, 20, 10, 10, // RANK 6
    50, 50, 50, 50, 50, 50, 50, 50, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];
const BLACK_PAWN_PST: [i32; 64] = mirror_pst(&WHITE_PAWN_PST);

pub const WHITE_KNIGHT_PST: [i32; 64] = [
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 1: a1..h1
    -40, -20, 0, 5, 5, 0, -20, -40, // RANK 2
    -30, 5, 10, 15, 15, 10, 5, -30, // RANK 3
    -30, 0, 15, 20, 20, 15, 0, -30, // RANK 4
    -30, 5, 15, 20, 20, 15, 5, -30, // RANK 5
    -30, 0, 10, 15, 15, 10, 0, -30, // RANK 6
    -40, -20, 0, 0, 0, 0, -20, -40, // RANK 7
    -50, -40, -30, -30, -30, -30, -40, -50, // RANK 8
];
const BLACK_KNIGHT_PST: [i32; 64] = mirror_pst(&WHITE_KNIGHT_PST);

pub const WHITE_BISHOP_PST: [i32; 64] = [
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 1: a1..h1
    -10, 5, 0, 0, 0, 0, 5, -10, // RANK 2
    -10, 10, 10, 10, 10, 10, 10, -10, // RANK 3
    -10, 0, 10, 10, 10, 10, 0, -10, // RANK 4
    -10, 5, 5, 10, 10, 5, 5, -10, // RANK 5
    -10, 0, 5, 10, 10, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -10, -10, -10, -10, -20, // RANK 8
];
const BLACK_BISHOP_PST: [i32; 64] = mirror_pst(&WHITE_BISHOP_PST);

pub const WHITE_ROOK_PST: [i32; 64] = [
    0, 0, 0, 5, 5, 0, 0, 0, // RANK 1: a1..h1
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 2
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 3
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 4
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 5
    -5, 0, 0, 0, 0, 0, 0, -5, // RANK 6
    5, 10, 10, 10, 10, 10, 10, 5, // RANK 7
    0, 0, 0, 0, 0, 0, 0, 0, // RANK 8
];
const BLACK_ROOK_PST: [i32; 64] = mirror_pst(&WHITE_ROOK_PST);

pub const WHITE_QUEEN_PST: [i32; 64] = [
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 1: a1..h1
    -10, 0, 5, 0, 0, 0, 0, -10, // RANK 2
    -10, 5, 5, 5, 5, 5, 0, -10, // RANK 3
    0, 0, 5, 5, 5, 5, 0, -5, // RANK 4
    -5, 0, 5, 5, 5, 5, 0, -5, // RANK 5
    -10, 0, 5, 5, 5, 5, 0, -10, // RANK 6
    -10, 0, 0, 0, 0, 0, 0, -10, // RANK 7
    -20, -10, -10, -5, -5, -10, -10, -20, // RANK 8
];
const BLACK_QUEEN_PST: [i32; 64] = mirror_pst(&WHITE_QUEEN_PST);

// Middlegame king: stay tucked away behind the pawns
pub const WHITE_KING_PST: [i32; 64] = [
    20, 30, 10, 0, 0, 10, 30, 20, // RANK 1: a1..h1
    20, 20, 0, 0, 0, 0, 20, 20, // RANK 2
    -10, -20, -20, -20, -20, -20, -20, -10, // RANK 3
    -20, -30, -30, -40, -40, -30, -30, -20, // RANK 4
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 5
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 6
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 7
    -30, -40, -40, -50, -50, -40, -40, -30, // RANK 8
];
const BLACK_KING_PST: [i32; 64] = mirror_pst(&WHITE_KING_PST);
