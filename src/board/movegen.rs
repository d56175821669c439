//! Candidate-move generation and check / checkmate / stalemate detection.

use std::collections::HashSet;

use log::trace;

use super::templates::movement_options;
use super::types::{Color, Coordinate, Piece, PieceKind};
use super::{Board, PositionMap};

/// Walk a piece's movement templates against a position snapshot.
///
/// Produces the pseudo-legal destination set: board occupancy and capture
/// rules are honored, self-check exposure is not. The en passant and castling
/// extensions are deliberately absent so the check predicate can reuse this
/// without recursing.
fn template_moves(piece: Piece, from: Coordinate, position: &PositionMap) -> HashSet<Coordinate> {
    let mut moves = HashSet::new();
    // A pawn's straight steps may never capture; its capturing templates are
    // marked `requires_capture` and handled separately below.
    let may_capture = piece.kind != PieceKind::Pawn;
    for option in movement_options(piece.kind, piece.color, piece.has_moved) {
        // The pawn double-step may not jump an occupied square.
        if option.dy.abs() == 2 && option.dx == 0 {
            let skipped = from.offset(0, option.dy.signum());
            if position.contains_key(&skipped) {
                continue;
            }
        }
        let mut current = from;
        loop {
            let next = current.offset(option.dx, option.dy);
            if !next.is_on_board() {
                break;
            }
            let occupant = position.get(&next).copied();
            if option.requires_capture {
                if occupant.is_some_and(|other| other.color != piece.color) {
                    moves.insert(next);
                }
                break;
            }
            match occupant {
                Some(other) if other.color != piece.color && may_capture => {
                    // Capture ends a slide.
                    moves.insert(next);
                    break;
                }
                Some(_) => break,
                None => {
                    moves.insert(next);
                    if !option.sliding {
                        break;
                    }
                    current = next;
                }
            }
        }
    }
    moves
}

impl Board {
    /// Pseudo-legal destinations for `piece` standing on `from`, evaluated
    /// against `position`.
    ///
    /// `position` may be the live map or a hypothetical snapshot. Includes
    /// the en passant and castling candidates, which depend on board history
    /// (the en passant target and moved flags) and so cannot be derived from
    /// the static templates alone.
    #[must_use]
    pub fn potential_moves(
        &self,
        piece: Piece,
        from: Coordinate,
        position: &PositionMap,
    ) -> HashSet<Coordinate> {
        let mut moves = template_moves(piece, from, position);

        if piece.kind == PieceKind::Pawn {
            if let Some(target) = self.en_passant_target {
                let capture_rank = from.rank() + piece.color.pawn_direction();
                if (target.file() - from.file()).abs() == 1 && target.rank() == capture_rank {
                    moves.insert(target);
                }
            }
        }

        if piece.kind == PieceKind::King && !piece.has_moved {
            self.castling_moves(piece, from, position, &mut moves);
        }

        trace!(
            "potential moves for {} at {}: {:?}",
            piece,
            from,
            sorted(&moves)
        );
        moves
    }

    /// Add the castling destinations available to an unmoved king.
    ///
    /// For each side, the rook on the king's rank must be present and
    /// unmoved, every square strictly between them empty, and the king may
    /// not be attacked where it stands, on the square it crosses, or on the
    /// square it lands.
    fn castling_moves(
        &self,
        king: Piece,
        from: Coordinate,
        position: &PositionMap,
        moves: &mut HashSet<Coordinate>,
    ) {
        for rook_file in [7i8, 0] {
            let rook_square = Coordinate::new_unchecked(rook_file, from.rank());
            let Some(rook) = position.get(&rook_square).copied() else {
                continue;
            };
            if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved {
                continue;
            }

            let step: i8 = if rook_file > from.file() { 1 } else { -1 };
            let mut file = from.file() + step;
            let mut blocked = false;
            while file != rook_file {
                if position.contains_key(&Coordinate::new_unchecked(file, from.rank())) {
                    blocked = true;
                    break;
                }
                file += step;
            }
            if blocked {
                continue;
            }

            let crossing = from.offset(step, 0);
            let landing = from.offset(2 * step, 0);
            let transit_attacked = [from, crossing, landing]
                .into_iter()
                .any(|square| self.king_attacked_at(king.color, from, square, position));
            if !transit_attacked {
                moves.insert(landing);
            }
        }
    }

    /// Would `color`'s king be attacked standing on `hypothetical`, given
    /// that it currently stands on `from` in `position`?
    fn king_attacked_at(
        &self,
        color: Color,
        from: Coordinate,
        hypothetical: Coordinate,
        position: &PositionMap,
    ) -> bool {
        if from == hypothetical {
            return self.is_in_check(color, hypothetical, position);
        }
        let mut scratch = position.clone();
        if let Some(king) = scratch.remove(&from) {
            scratch.insert(hypothetical, king);
        }
        self.is_in_check(color, hypothetical, &scratch)
    }

    /// Check predicate: is `color`'s king, standing on `king_square`,
    /// attacked in `position`?
    ///
    /// Takes the snapshot and king square explicitly so it can be evaluated
    /// against simulated positions. Uses template moves only; the castling
    /// and en passant extensions can never deliver the attack that matters
    /// here, and omitting them keeps the predicate non-recursive.
    #[must_use]
    pub fn is_in_check(
        &self,
        color: Color,
        king_square: Coordinate,
        position: &PositionMap,
    ) -> bool {
        position.iter().any(|(&square, &piece)| {
            piece.color != color && template_moves(piece, square, position).contains(&king_square)
        })
    }

    /// Is the side to move currently in check on the live board?
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.color_in_check(self.turn)
    }

    pub(crate) fn color_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king_square) => self.is_in_check(color, king_square, &self.pieces),
            None => false,
        }
    }

    /// Does `color` have at least one legal move on the live board?
    ///
    /// Scans every piece and every pseudo-legal destination; a simulated
    /// position that leaves the mover's own king out of check ends the scan.
    pub(crate) fn has_any_legal_move(&self, color: Color) -> bool {
        let own_pieces: Vec<(Coordinate, Piece)> = self
            .occupied_squares()
            .filter(|(_, piece)| piece.color == color)
            .collect();

        for (from, piece) in own_pieces {
            for to in self.potential_moves(piece, from, &self.pieces) {
                let mut simulated = self.pieces.clone();
                if let Some(moving) = simulated.remove(&from) {
                    simulated.insert(to, moving);
                }
                let king_square = if piece.kind == PieceKind::King {
                    Some(to)
                } else {
                    self.king_square(color)
                };
                match king_square {
                    Some(square) => {
                        if !self.is_in_check(color, square, &simulated) {
                            return true;
                        }
                    }
                    // No king to expose, so the move stands.
                    None => return true,
                }
            }
        }
        false
    }

    /// Is the side to move checkmated (in check with no legal move)?
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_any_legal_move(self.turn)
    }

    /// Is the side to move stalemated (not in check, yet no legal move)?
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_any_legal_move(self.turn)
    }
}

fn sorted(moves: &HashSet<Coordinate>) -> Vec<String> {
    let mut list: Vec<Coordinate> = moves.iter().copied().collect();
    list.sort();
    list.into_iter().map(|square| square.to_string()).collect()
}
