//! Outcome of an accepted move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coordinate, Piece};

/// Describes a successfully executed move.
///
/// `piece` is the piece as it stands after the move, so a promotion reports
/// the new queen. For an en passant capture, `captured` is the passed pawn
/// even though it did not occupy the destination square.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResult {
    pub piece: Piece,
    pub from: Coordinate,
    pub to: Coordinate,
    pub captured: Option<Piece>,
    pub check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}
