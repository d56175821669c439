//! Move rejection: error taxonomy and state preservation.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, MoveError, Piece, PieceKind};

#[test]
fn rejects_move_from_empty_square() {
    let mut board = Board::new();
    let before = board.serialize();

    let err = board.move_piece(sq("e4"), sq("e5")).unwrap_err();
    assert_eq!(err, MoveError::EmptySquare { square: sq("e4") });
    assert_eq!(board.serialize(), before);
}

#[test]
fn rejects_moving_the_opponents_piece() {
    let mut board = Board::new();
    let before = board.serialize();

    let err = board.move_piece(sq("e7"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        MoveError::WrongSideToMove {
            square: sq("e7"),
            side_to_move: Color::White,
        }
    );
    assert_eq!(board.serialize(), before);
}

#[test]
fn rejects_destination_outside_the_candidate_set() {
    let mut board = Board::new();
    let before = board.serialize();

    let err = board.move_piece(sq("e2"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5"),
        }
    );
    assert_eq!(board.serialize(), before);
}

#[test]
fn rejects_breaking_a_pin_and_rolls_back() {
    // The white rook on e2 shields its king from the rook on e8.
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(Color::White, PieceKind::King))
        .piece(sq("e2"), Piece::new(Color::White, PieceKind::Rook))
        .piece(sq("e8"), Piece::new(Color::Black, PieceKind::Rook).moved())
        .piece(sq("h8"), Piece::new(Color::Black, PieceKind::King).moved())
        .build();
    let before = board.serialize();

    let err = board.move_piece(sq("e2"), sq("d2")).unwrap_err();
    assert_eq!(
        err,
        MoveError::SelfCheckExposure {
            from: sq("e2"),
            to: sq("d2"),
        }
    );
    assert_eq!(board.serialize(), before);
    assert_eq!(board.turn(), Color::White);
}

#[test]
fn rejects_king_stepping_into_an_attacked_square() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(Color::White, PieceKind::King))
        .piece(sq("a2"), Piece::new(Color::Black, PieceKind::Rook).moved())
        .piece(sq("e8"), Piece::new(Color::Black, PieceKind::King))
        .build();
    let before = board.serialize();

    let err = board.move_piece(sq("e1"), sq("e2")).unwrap_err();
    assert_eq!(
        err,
        MoveError::SelfCheckExposure {
            from: sq("e1"),
            to: sq("e2"),
        }
    );
    assert_eq!(board.serialize(), before);
    assert_eq!(board.king_square(Color::White), Some(sq("e1")));
}

#[test]
fn rejected_capture_restores_the_captured_piece() {
    // The pinned rook may not leave the e-file, even to take the pawn.
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Piece::new(Color::White, PieceKind::King))
        .piece(sq("e2"), Piece::new(Color::White, PieceKind::Rook))
        .piece(sq("a2"), Piece::new(Color::Black, PieceKind::Pawn).moved())
        .piece(sq("e8"), Piece::new(Color::Black, PieceKind::Rook).moved())
        .piece(sq("h8"), Piece::new(Color::Black, PieceKind::King).moved())
        .build();
    let before = board.serialize();

    let err = board.move_piece(sq("e2"), sq("a2")).unwrap_err();
    assert_eq!(
        err,
        MoveError::SelfCheckExposure {
            from: sq("e2"),
            to: sq("a2"),
        }
    );
    assert_eq!(board.serialize(), before);
    assert_eq!(
        board.piece_at(sq("a2")).map(|p| p.kind),
        Some(PieceKind::Pawn)
    );
}

#[test]
fn turn_is_unchanged_after_rejection_then_play_continues() {
    let mut board = Board::new();

    assert!(board.move_piece(sq("e2"), sq("d3")).is_err());
    assert_eq!(board.turn(), Color::White);

    let result = board.move_piece(sq("e2"), sq("e4")).unwrap();
    assert_eq!(result.to, sq("e4"));
    assert_eq!(board.turn(), Color::Black);
}
