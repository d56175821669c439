//! Directional movement templates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A directional move template: a (file, rank) delta plus how it is applied.
///
/// `sliding` templates are stepped repeatedly from the last landing square
/// until blocked or off-board; `requires_capture` templates only yield a
/// candidate when an enemy piece occupies the destination (pawn diagonals).
/// Templates know nothing about board occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MovementOption {
    pub dx: i8,
    pub dy: i8,
    pub sliding: bool,
    pub requires_capture: bool,
}

impl MovementOption {
    /// A single-step template.
    #[must_use]
    pub const fn step(dx: i8, dy: i8) -> Self {
        MovementOption {
            dx,
            dy,
            sliding: false,
            requires_capture: false,
        }
    }

    /// A repeating template for sliding pieces.
    #[must_use]
    pub const fn slide(dx: i8, dy: i8) -> Self {
        MovementOption {
            dx,
            dy,
            sliding: true,
            requires_capture: false,
        }
    }

    /// A single-step template that is only legal onto an enemy piece.
    #[must_use]
    pub const fn capture_step(dx: i8, dy: i8) -> Self {
        MovementOption {
            dx,
            dy,
            sliding: false,
            requires_capture: true,
        }
    }

    /// The same template with its vertical direction flipped (black pawns).
    #[must_use]
    pub const fn inverse_direction(self) -> Self {
        MovementOption {
            dx: self.dx,
            dy: -self.dy,
            sliding: self.sliding,
            requires_capture: self.requires_capture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_direction_flips_rank_delta_only() {
        let take_right = MovementOption::capture_step(1, 1);
        let inverted = take_right.inverse_direction();
        assert_eq!(inverted.dx, 1);
        assert_eq!(inverted.dy, -1);
        assert!(inverted.requires_capture);
        assert!(!inverted.sliding);
    }
}
