use cozy_chess::{
    get_between_rays, get_bishop_moves, get_bishop_rays, get_king_moves, get_knight_moves,
    get_line_rays, get_pawn_attacks, get_rook_moves, get_rook_rays, BitBoard, Board, Color, Piece,
    Square,
};

/// Immutable piece placement used for "what if" queries.
///
/// Unlike `Board`, a snapshot does not care about legality: pieces can be lifted
/// off or moved anywhere, and every query only looks at placement and occupancy.
/// Derived snapshots are returned by value, the original is never touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    colors: [BitBoard; Color::NUM],
    pieces: [BitBoard; Piece::NUM],
}

impl Snapshot {
    pub fn new(board: &Board) -> Self {
        Self {
            colors: [board.colors(Color::White), board.colors(Color::Black)],
            pieces: [
                board.pieces(Piece::Pawn),
                board.pieces(Piece::Knight),
                board.pieces(Piece::Bishop),
                board.pieces(Piece::Rook),
                board.pieces(Piece::Queen),
                board.pieces(Piece::King),
            ],
        }
    }

    #[inline(always)]
    pub fn occupied(&self) -> BitBoard {
        self.colors[0] | self.colors[1]
    }

    #[inline(always)]
    pub fn colors(&self, color: Color) -> BitBoard {
        self.colors[color as usize]
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece) -> BitBoard {
        self.pieces[piece as usize]
    }

    #[inline(always)]
    pub fn colored_pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.colors(color) & self.pieces(piece)
    }

    /// Bishops, rooks and queens of `color`.
    #[inline(always)]
    pub fn sliders(&self, color: Color) -> BitBoard {
        let sliders =
            self.pieces(Piece::Bishop) | self.pieces(Piece::Rook) | self.pieces(Piece::Queen);
        sliders & self.colors(color)
    }

    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(piece).has(square))
    }

    pub fn color_on(&self, square: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.colors(color).has(square))
    }

    pub fn king(&self, color: Color) -> Option<Square> {
        self.colored_pieces(color, Piece::King).next_square()
    }

    /// Squares attacked by whatever stands on `square`, given the current occupancy.
    /// Pawns attack their capture diagonals whether or not anything stands there.
    pub fn attacks(&self, square: Square) -> BitBoard {
        let (Some(piece), Some(color)) = (self.piece_on(square), self.color_on(square)) else {
            return BitBoard::EMPTY;
        };

        let blockers = self.occupied();
        match piece {
            Piece::Pawn => get_pawn_attacks(square, color),
            Piece::Knight => get_knight_moves(square),
            Piece::Bishop => get_bishop_moves(square, blockers),
            Piece::Rook => get_rook_moves(square, blockers),
            Piece::Queen => get_bishop_moves(square, blockers) | get_rook_moves(square, blockers),
            Piece::King => get_king_moves(square),
        }
    }

    /// Squares holding `color` pieces that attack `square`.
    pub fn attackers(&self, color: Color, square: Square) -> BitBoard {
        let blockers = self.occupied();
        let queens = self.pieces(Piece::Queen);

        let diagonal = get_bishop_moves(square, blockers) & (self.pieces(Piece::Bishop) | queens);
        let orthogonal = get_rook_moves(square, blockers) & (self.pieces(Piece::Rook) | queens);
        let knights = get_knight_moves(square) & self.pieces(Piece::Knight);
        let kings = get_king_moves(square) & self.pieces(Piece::King);
        // A pawn of `color` hits `square` exactly when a pawn of the other color on
        // `square` would hit the pawn.
        let pawns = get_pawn_attacks(square, !color) & self.pieces(Piece::Pawn);

        (diagonal | orthogonal | knights | kings | pawns) & self.colors(color)
    }

    /// If the `color` piece on `square` is pinned to its own king, returns the whole
    /// line running through the king and the pinning slider.
    pub fn pin_ray(&self, color: Color, square: Square) -> Option<BitBoard> {
        if !self.colors(color).has(square) {
            return None;
        }
        let king = self.king(color)?;
        if king == square {
            return None;
        }

        let enemy_queens = self.colored_pieces(!color, Piece::Queen);
        let rays = [
            (
                get_rook_rays(king),
                self.colored_pieces(!color, Piece::Rook) | enemy_queens,
            ),
            (
                get_bishop_rays(king),
                self.colored_pieces(!color, Piece::Bishop) | enemy_queens,
            ),
        ];

        let occupied = self.occupied();
        for (ray, snipers) in rays {
            if !ray.has(square) {
                continue;
            }
            for sniper in ray & snipers {
                if get_between_rays(sniper, king) & occupied == square.bitboard() {
                    return Some(get_line_rays(king, sniper));
                }
            }
        }
        None
    }

    /// Snapshot with `square` emptied.
    pub fn without(&self, square: Square) -> Self {
        let mask = !square.bitboard();
        let mut next = *self;
        for bb in next.colors.iter_mut().chain(next.pieces.iter_mut()) {
            *bb &= mask;
        }
        next
    }

    /// Snapshot with the piece on `from` relocated to `to`, capturing anything there.
    /// An empty `from` yields an unchanged copy.
    pub fn with_move(&self, from: Square, to: Square) -> Self {
        let (Some(piece), Some(color)) = (self.piece_on(from), self.color_on(from)) else {
            return *self;
        };

        let mut next = self.without(from).without(to);
        next.colors[color as usize] |= to.bitboard();
        next.pieces[piece as usize] |= to.bitboard();
        next
    }
}
