//! Error types for board operations.

use std::fmt;

use super::types::{Color, Coordinate};

/// Error type for move rejections.
///
/// Every variant leaves the board exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    EmptySquare { square: Coordinate },
    /// The piece on the origin square belongs to the side not on move
    WrongSideToMove { square: Coordinate, side_to_move: Color },
    /// The destination is not among the piece's candidate moves
    IllegalDestination { from: Coordinate, to: Coordinate },
    /// The move would leave the mover's own king attacked
    SelfCheckExposure { from: Coordinate, to: Coordinate },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => {
                write!(f, "No piece at {square}")
            }
            MoveError::WrongSideToMove {
                square,
                side_to_move,
            } => {
                write!(f, "Piece at {square} is not owned by {side_to_move}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "{from} to {to} is not a valid move")
            }
            MoveError::SelfCheckExposure { from, to } => {
                write!(f, "{from} to {to} would expose the king to check")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square notation parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a valid 2-character algebraic square (a1-h8)
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for serialized-state parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateParseError {
    /// A line does not match any known record shape
    MalformedLine { line: usize },
    /// Invalid square notation in a piece record or en passant token
    InvalidSquare { notation: String },
    /// Unknown piece kind name
    InvalidPiece { found: String },
    /// Unknown color token
    InvalidColor { found: String },
    /// Moved flag is neither "moved" nor "unmoved"
    InvalidMovedFlag { found: String },
    /// Two piece records name the same square
    DuplicateSquare { square: Coordinate },
    /// No turn marker in the input
    MissingTurn,
}

impl fmt::Display for StateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateParseError::MalformedLine { line } => {
                write!(f, "Malformed board state record on line {line}")
            }
            StateParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square '{notation}' in board state")
            }
            StateParseError::InvalidPiece { found } => {
                write!(f, "Unknown piece kind '{found}' in board state")
            }
            StateParseError::InvalidColor { found } => {
                write!(f, "Unknown color '{found}' in board state")
            }
            StateParseError::InvalidMovedFlag { found } => {
                write!(f, "Moved flag must be 'moved' or 'unmoved', found '{found}'")
            }
            StateParseError::DuplicateSquare { square } => {
                write!(f, "Square {square} appears twice in board state")
            }
            StateParseError::MissingTurn => {
                write!(f, "Board state has no turn marker")
            }
        }
    }
}

impl std::error::Error for StateParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn test_move_error_empty_square() {
        let err = MoveError::EmptySquare { square: sq("e4") };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_wrong_side() {
        let err = MoveError::WrongSideToMove {
            square: sq("e7"),
            side_to_move: Color::White,
        };
        assert!(err.to_string().contains("White"));
        assert!(err.to_string().contains("e7"));
    }

    #[test]
    fn test_move_error_illegal_destination() {
        let err = MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5"),
        };
        assert!(err.to_string().contains("e2"));
        assert!(err.to_string().contains("e5"));
    }

    #[test]
    fn test_move_error_self_check() {
        let err = MoveError::SelfCheckExposure {
            from: sq("d7"),
            to: sq("d5"),
        };
        assert!(err.to_string().contains("check"));
    }

    #[test]
    fn test_square_error_display() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_state_error_display() {
        let err = StateParseError::InvalidPiece {
            found: "Dragon".to_string(),
        };
        assert!(err.to_string().contains("Dragon"));

        let err = StateParseError::DuplicateSquare { square: sq("a1") };
        assert!(err.to_string().contains("a1"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = MoveError::EmptySquare { square: sq("b2") };
        let err2 = MoveError::EmptySquare { square: sq("b2") };
        assert_eq!(err1, err2);
    }
}
