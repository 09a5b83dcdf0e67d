use cozy_chess::{Color, Piece};

/// Coarse piece values used when judging exchanges and pins.
/// The king is given a large value so that it always outranks everything else.
pub const fn exchange_value(piece: Piece) -> u32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight => 3,
        Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 200,
    }
}

pub const fn is_slider(piece: Piece) -> bool {
    matches!(piece, Piece::Bishop | Piece::Rook | Piece::Queen)
}

pub const fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

pub const fn piece_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "Pawn",
        Piece::Knight => "Knight",
        Piece::Bishop => "Bishop",
        Piece::Rook => "Rook",
        Piece::Queen => "Queen",
        Piece::King => "King",
    }
}

/// Name used when a sentence may refer to several pieces of one type.
/// There is normally a single queen and king, so those stay singular.
pub const fn piece_group_name(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "Pawn(s)",
        Piece::Knight => "Knight(s)",
        Piece::Bishop => "Bishop(s)",
        Piece::Rook => "Rook(s)",
        Piece::Queen => "Queen",
        Piece::King => "King",
    }
}
