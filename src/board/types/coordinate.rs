//! Board coordinates in algebraic notation.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square addressed by zero-based file (a=0) and rank (1=0).
///
/// Off-board coordinates are representable so that template walks can step
/// past the edge and test [`Coordinate::is_on_board`] afterwards. Every
/// coordinate stored in a board or returned from move generation is on the
/// board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    file: i8,
    rank: i8,
}

impl Coordinate {
    /// Create an on-board coordinate, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn new(file: i8, rank: i8) -> Option<Coordinate> {
        let coordinate = Coordinate { file, rank };
        coordinate.is_on_board().then_some(coordinate)
    }

    /// Create a coordinate without the bounds check. Callers guarantee the
    /// values are in range.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(file: i8, rank: i8) -> Coordinate {
        Coordinate { file, rank }
    }

    /// Zero-based file (a=0 through h=7)
    #[inline]
    #[must_use]
    pub const fn file(self) -> i8 {
        self.file
    }

    /// Zero-based rank (rank 1 = 0 through rank 8 = 7)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> i8 {
        self.rank
    }

    /// The coordinate displaced by a (file, rank) delta. May leave the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Coordinate {
        Coordinate {
            file: self.file + dx,
            rank: self.rank + dy,
        }
    }

    /// Whether the coordinate lies within the 8x8 board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file as u8) as char;
        write!(f, "{file}{}", self.rank + 1)
    }
}

impl FromStr for Coordinate {
    type Err = SquareError;

    /// Parse algebraic notation ("a1" through "h8").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Coordinate {
            file: (file as u8 - b'a') as i8,
            rank: (rank as u8 - b'1') as i8,
        })
    }
}
