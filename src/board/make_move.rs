//! Move execution: apply, validate, roll back or commit.

use log::debug;

use super::error::MoveError;
use super::types::{Coordinate, MoveResult, Piece, PieceKind};
use super::Board;

impl Board {
    /// Attempt to move the piece on `origin` to `destination`.
    ///
    /// The move is applied to the live position together with its
    /// side-effects (en passant capture and bookkeeping, castling rook
    /// relocation, forced queen promotion) and only then validated: if the
    /// mover's own king ends up attacked, everything is rolled back and the
    /// board is left exactly as before the call. On success the turn flips
    /// and the returned [`MoveResult`] carries the opponent's resulting
    /// status.
    pub fn move_piece(
        &mut self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<MoveResult, MoveError> {
        let piece = self
            .pieces
            .get(&origin)
            .copied()
            .ok_or(MoveError::EmptySquare { square: origin })?;
        if piece.color != self.turn {
            return Err(MoveError::WrongSideToMove {
                square: origin,
                side_to_move: self.turn,
            });
        }

        debug!("attempting to move {piece} from {origin} to {destination}");
        let candidates = self.potential_moves(piece, origin, &self.pieces);
        if !candidates.contains(&destination) {
            return Err(MoveError::IllegalDestination {
                from: origin,
                to: destination,
            });
        }

        let snapshot = (
            self.pieces.clone(),
            self.en_passant_target,
            self.king_squares,
        );
        let previous_en_passant_target = self.en_passant_target;

        let mut moved = piece;
        moved.has_moved = true;
        self.pieces.remove(&origin);
        let mut captured = self.pieces.insert(destination, moved);

        // En passant capture: the destination is the skipped square, the
        // passed pawn sits beside it on the origin's rank.
        if piece.kind == PieceKind::Pawn && Some(destination) == previous_en_passant_target {
            let passed = Coordinate::new_unchecked(destination.file(), origin.rank());
            captured = self.pieces.remove(&passed);
        }

        // En passant bookkeeping: set after a double pawn advance, otherwise
        // unconditionally cleared.
        self.en_passant_target =
            if piece.kind == PieceKind::Pawn && (destination.rank() - origin.rank()).abs() == 2 {
                Some(origin.offset(0, piece.color.pawn_direction()))
            } else {
                None
            };

        // Castling: a king moving two files drags the rook to the crossed
        // square.
        if piece.kind == PieceKind::King && (destination.file() - origin.file()).abs() == 2 {
            let step = (destination.file() - origin.file()).signum();
            let rook_file = if step > 0 { 7 } else { 0 };
            let rook_square = Coordinate::new_unchecked(rook_file, origin.rank());
            if let Some(rook) = self.pieces.remove(&rook_square) {
                self.pieces.insert(origin.offset(step, 0), rook.moved());
            }
        }

        // Forced queen promotion on the opponent's back rank.
        if piece.kind == PieceKind::Pawn && destination.rank() == piece.color.promotion_rank() {
            moved = Piece::new(piece.color, PieceKind::Queen).moved();
            self.pieces.insert(destination, moved);
        }

        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = Some(destination);
        }

        let exposes_check = match self.king_square(piece.color) {
            Some(king_square) => self.is_in_check(piece.color, king_square, &self.pieces),
            None => false,
        };
        if exposes_check {
            debug!("move {origin} to {destination} exposes check, rolling back");
            let (pieces, en_passant_target, king_squares) = snapshot;
            self.pieces = pieces;
            self.en_passant_target = en_passant_target;
            self.king_squares = king_squares;
            return Err(MoveError::SelfCheckExposure {
                from: origin,
                to: destination,
            });
        }

        if let Some(taken) = captured {
            debug!("the {taken} was taken");
        }

        let opponent = piece.color.opponent();
        let check = self.color_in_check(opponent);
        let can_move = self.has_any_legal_move(opponent);
        if check {
            debug!("{opponent} is in check");
        }

        self.turn = opponent;
        Ok(MoveResult {
            piece: moved,
            from: origin,
            to: destination,
            captured,
            check,
            checkmate: check && !can_move,
            stalemate: !check && !can_move,
        })
    }
}
