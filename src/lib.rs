pub mod board;

pub use board::{
    Board, BoardBuilder, Color, Coordinate, MoveError, MoveResult, Piece, PieceKind, PositionMap,
};
