//! Leaf value types: coordinates, colors, pieces, movement templates, results.

mod coordinate;
mod move_result;
mod movement;
mod piece;

pub use coordinate::Coordinate;
pub use move_result::MoveResult;
pub use movement::MovementOption;
pub use piece::{Color, Piece, PieceKind};
