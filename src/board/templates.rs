//! Movement-template catalog.
//!
//! Maps (kind, color, moved flag) to the piece's directional templates.
//! Pure data: the catalog knows nothing about board occupancy. Fixed kinds
//! use `const` tables; the four pawn variants (color x moved) are assembled
//! once behind a lazy static, with black's templates vertically inverted so
//! "forward" points toward rank 1.

use once_cell::sync::Lazy;

use super::types::{Color, MovementOption, PieceKind};

const KING_TEMPLATES: [MovementOption; 8] = [
    MovementOption::step(0, 1),
    MovementOption::step(0, -1),
    MovementOption::step(-1, 0),
    MovementOption::step(1, 0),
    MovementOption::step(1, 1),
    MovementOption::step(-1, 1),
    MovementOption::step(1, -1),
    MovementOption::step(-1, -1),
];

const KNIGHT_TEMPLATES: [MovementOption; 8] = [
    MovementOption::step(1, 2),
    MovementOption::step(-1, 2),
    MovementOption::step(1, -2),
    MovementOption::step(-1, -2),
    MovementOption::step(2, 1),
    MovementOption::step(2, -1),
    MovementOption::step(-2, 1),
    MovementOption::step(-2, -1),
];

const BISHOP_TEMPLATES: [MovementOption; 4] = [
    MovementOption::slide(1, 1),
    MovementOption::slide(-1, 1),
    MovementOption::slide(1, -1),
    MovementOption::slide(-1, -1),
];

const ROOK_TEMPLATES: [MovementOption; 4] = [
    MovementOption::slide(0, 1),
    MovementOption::slide(0, -1),
    MovementOption::slide(-1, 0),
    MovementOption::slide(1, 0),
];

const QUEEN_TEMPLATES: [MovementOption; 8] = [
    MovementOption::slide(0, 1),
    MovementOption::slide(0, -1),
    MovementOption::slide(-1, 0),
    MovementOption::slide(1, 0),
    MovementOption::slide(1, 1),
    MovementOption::slide(-1, 1),
    MovementOption::slide(1, -1),
    MovementOption::slide(-1, -1),
];

/// White pawn templates before direction inversion. The double-step is only
/// present while the pawn is unmoved.
const PAWN_BASE: [MovementOption; 3] = [
    MovementOption::step(0, 1),
    MovementOption::capture_step(1, 1),
    MovementOption::capture_step(-1, 1),
];

const PAWN_DOUBLE_STEP: MovementOption = MovementOption::step(0, 2);

/// Assembled pawn variants, indexed by `[color][has_moved]`.
static PAWN_TEMPLATES: Lazy<[[Vec<MovementOption>; 2]; 2]> = Lazy::new(|| {
    let assemble = |color: Color, has_moved: bool| -> Vec<MovementOption> {
        let mut options = PAWN_BASE.to_vec();
        if !has_moved {
            options.push(PAWN_DOUBLE_STEP);
        }
        if color == Color::Black {
            for option in &mut options {
                *option = option.inverse_direction();
            }
        }
        options
    };
    [
        [assemble(Color::White, false), assemble(Color::White, true)],
        [assemble(Color::Black, false), assemble(Color::Black, true)],
    ]
});

/// Current movement templates for a piece.
pub(crate) fn movement_options(
    kind: PieceKind,
    color: Color,
    has_moved: bool,
) -> &'static [MovementOption] {
    match kind {
        PieceKind::Pawn => &PAWN_TEMPLATES[color.index()][usize::from(has_moved)],
        PieceKind::Knight => &KNIGHT_TEMPLATES,
        PieceKind::Bishop => &BISHOP_TEMPLATES,
        PieceKind::Rook => &ROOK_TEMPLATES,
        PieceKind::Queen => &QUEEN_TEMPLATES,
        PieceKind::King => &KING_TEMPLATES,
    }
}
