//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movement.rs` - per-piece candidate generation
//! - `castling.rs` - castling availability and execution
//! - `en_passant.rs` - en passant candidates, capture and bookkeeping
//! - `promotion.rs` - forced queen promotion
//! - `rejection.rs` - move rejection and state preservation
//! - `status.rs` - check, checkmate and stalemate detection
//! - `save_restore.rs` - text serialization round trips
//! - `proptest.rs` - property-based tests

mod rejection;

use crate::board::Coordinate;

pub(crate) fn sq(notation: &str) -> Coordinate {
    notation.parse().expect("valid square notation")
}
