//! Fluent builder for constructing board positions.
//!
//! This is the setup/test entry point: it bypasses move legality entirely.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, PieceKind};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Piece::new(Color::White, PieceKind::King))
//!     .piece("e8".parse().unwrap(), Piece::new(Color::Black, PieceKind::King))
//!     .piece("d4".parse().unwrap(), Piece::new(Color::White, PieceKind::Pawn).moved())
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::types::{Color, Coordinate, Piece};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Coordinate, Piece)>,
    side_to_move: Color,
    en_passant_target: Option<Coordinate>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().occupied_squares().collect();
        builder
    }

    /// Place a piece on a square, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Coordinate, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Coordinate) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Coordinate) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Clear the en passant target.
    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant_target = None;
        self
    }

    /// Build the board. The king cache is derived from the placed pieces.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        board.pieces = self.pieces.into_iter().collect();
        board.turn = self.side_to_move;
        board.en_passant_target = self.en_passant_target;
        board.refresh_king_cache();
        board
    }
}
