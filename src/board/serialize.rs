//! Text serialization of board state.
//!
//! One line per occupied square (`<square> <Kind> <COLOR> <moved|unmoved>`),
//! a `turn:` marker, and an optional `enpassant:` token. Output is ordered by
//! square so round trips are byte-comparable.

use super::error::StateParseError;
use super::types::{Color, Coordinate, Piece, PieceKind};
use super::Board;

impl Board {
    /// Render the board to its serialized text form.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut squares: Vec<(Coordinate, Piece)> = self.occupied_squares().collect();
        squares.sort_by_key(|(square, _)| *square);

        let mut out = String::new();
        for (square, piece) in squares {
            let moved = if piece.has_moved { "moved" } else { "unmoved" };
            out.push_str(&format!(
                "{square} {} {} {moved}\n",
                piece.kind.name(),
                piece.color.token()
            ));
        }
        out.push_str(&format!("turn:{}\n", self.turn.token()));
        if let Some(target) = self.en_passant_target {
            out.push_str(&format!("enpassant:{target}\n"));
        }
        out
    }

    /// Restore a board from its serialized text form.
    ///
    /// The king cache is rebuilt from the restored pieces rather than taken
    /// from the input.
    pub fn try_deserialize(input: &str) -> Result<Board, StateParseError> {
        let mut board = Board::empty();
        let mut turn = None;

        for (index, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(token) = line.strip_prefix("turn:") {
                turn = Some(Color::from_token(token).ok_or_else(|| {
                    StateParseError::InvalidColor {
                        found: token.to_string(),
                    }
                })?);
                continue;
            }

            if let Some(token) = line.strip_prefix("enpassant:") {
                let target = token
                    .parse()
                    .map_err(|_| StateParseError::InvalidSquare {
                        notation: token.to_string(),
                    })?;
                board.en_passant_target = Some(target);
                continue;
            }

            let mut parts = line.split_whitespace();
            let (Some(square), Some(kind), Some(color), Some(moved), None) = (
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
            ) else {
                return Err(StateParseError::MalformedLine { line: index + 1 });
            };

            let square: Coordinate =
                square.parse().map_err(|_| StateParseError::InvalidSquare {
                    notation: square.to_string(),
                })?;
            let kind =
                PieceKind::from_name(kind).ok_or_else(|| StateParseError::InvalidPiece {
                    found: kind.to_string(),
                })?;
            let color = Color::from_token(color).ok_or_else(|| StateParseError::InvalidColor {
                found: color.to_string(),
            })?;
            let has_moved = match moved {
                "moved" => true,
                "unmoved" => false,
                other => {
                    return Err(StateParseError::InvalidMovedFlag {
                        found: other.to_string(),
                    })
                }
            };

            let piece = Piece {
                kind,
                color,
                has_moved,
            };
            if board.pieces.insert(square, piece).is_some() {
                return Err(StateParseError::DuplicateSquare { square });
            }
        }

        board.turn = turn.ok_or(StateParseError::MissingTurn)?;
        board.refresh_king_cache();
        Ok(board)
    }

    /// Restore a board from its serialized text form.
    ///
    /// # Panics
    /// Panics if the input is invalid. Use `try_deserialize` for fallible
    /// restoration.
    #[must_use]
    pub fn deserialize(input: &str) -> Board {
        Board::try_deserialize(input).expect("invalid serialized board state")
    }
}
