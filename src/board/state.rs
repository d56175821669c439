//! Board state: position map, side to move, en passant target, king cache.

use std::collections::HashMap;

use super::types::{Color, Coordinate, Piece, PieceKind};

/// Sparse square-to-piece mapping. Absence of a key means the square is empty.
///
/// Candidate generation and the check predicate take this as an explicit
/// parameter so they can be evaluated against hypothetical positions, not
/// only the live board.
pub type PositionMap = HashMap<Coordinate, Piece>;

/// A chess board plus the rules engine operating on it.
///
/// State is mutated only through [`Board::move_piece`] and the setup/restore
/// entry points. Single-threaded by contract: embedders that share a board
/// across threads must serialize access externally.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: PositionMap,
    pub(crate) turn: Color,
    pub(crate) en_passant_target: Option<Coordinate>,
    /// Cached king squares per color, kept equal to the actual king
    /// coordinates. Updated when a king moves and on full-state restore.
    pub(crate) king_squares: [Option<Coordinate>; 2],
}

impl Board {
    /// The standard starting position, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::BOTH {
            for (file, &kind) in back_rank.iter().enumerate() {
                board.place_piece(
                    Coordinate::new_unchecked(file as i8, color.back_rank()),
                    Piece::new(color, kind),
                );
                board.place_piece(
                    Coordinate::new_unchecked(file as i8, color.pawn_start_rank()),
                    Piece::new(color, PieceKind::Pawn),
                );
            }
        }
        board
    }

    /// An empty board, white to move, no en passant target.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: PositionMap::new(),
            turn: Color::White,
            en_passant_target: None,
            king_squares: [None, None],
        }
    }

    /// The side to move.
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The square skipped by the immediately preceding double pawn advance,
    /// if any.
    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }

    /// The piece on a square, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Coordinate) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    /// The cached king square for a color.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Coordinate> {
        self.king_squares[color.index()]
    }

    /// Iterate over all occupied squares.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces.iter().map(|(&square, &piece)| (square, piece))
    }

    /// Place a piece, bypassing move legality. Setup/testing only.
    pub fn place_piece(&mut self, square: Coordinate, piece: Piece) {
        self.pieces.insert(square, piece);
        self.refresh_king_cache();
    }

    /// Remove a piece, bypassing move legality. Setup/testing only.
    pub fn remove_piece(&mut self, square: Coordinate) -> Option<Piece> {
        let removed = self.pieces.remove(&square);
        if removed.is_some() {
            self.refresh_king_cache();
        }
        removed
    }

    /// Set the side to move, bypassing turn alternation. Setup/testing only.
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// Set or clear the en passant target, bypassing move bookkeeping.
    /// Setup/testing only.
    pub fn set_en_passant_target(&mut self, target: Option<Coordinate>) {
        self.en_passant_target = target;
    }

    /// Rebuild the king cache from the piece data.
    pub(crate) fn refresh_king_cache(&mut self) {
        self.king_squares = [None, None];
        for (&square, piece) in &self.pieces {
            if piece.kind == PieceKind::King {
                self.king_squares[piece.color.index()] = Some(square);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::new();
        assert_eq!(board.pieces.len(), 32);
        assert_eq!(
            board.piece_at(sq("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(sq("a2")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.en_passant_target(), None);
    }

    #[test]
    fn test_king_cache_tracks_setup() {
        let mut board = Board::empty();
        assert_eq!(board.king_square(Color::White), None);

        board.place_piece(sq("g1"), Piece::new(Color::White, PieceKind::King).moved());
        assert_eq!(board.king_square(Color::White), Some(sq("g1")));

        board.remove_piece(sq("g1"));
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn test_starting_king_cache() {
        let board = Board::new();
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    }
}
