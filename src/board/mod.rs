//! Chess board representation and rules engine.
//!
//! Determines move legality, applies or rejects moves, and reports the
//! resulting game status (check, checkmate, stalemate). Covers the full rule
//! set: castling, en passant and forced queen promotion, all composed with
//! check detection.
//!
//! # Example
//! ```
//! use chess_rules::board::Board;
//!
//! let mut board = Board::new();
//! let result = board
//!     .move_piece("e2".parse().unwrap(), "e4".parse().unwrap())
//!     .unwrap();
//! assert!(!result.check);
//! ```

mod builder;
mod error;
mod make_move;
mod movegen;
mod serialize;
mod state;
mod templates;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError, StateParseError};
pub use state::{Board, PositionMap};
pub use types::{Color, Coordinate, MoveResult, MovementOption, Piece, PieceKind};
