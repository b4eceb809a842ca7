use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::{piece_at, step_moves};
use crate::moves::move_descriptions::{CandidateMove, CastleSide};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    from: Square,
    piece: Piece,
    include_castling: bool,
    out: &mut Vec<CandidateMove>,
) {
    step_moves(board, from, piece.color, &KING_OFFSETS, out);

    // Castling is only considered on the verified path; the attack query
    // generates king moves with `include_castling` off, which also keeps the
    // attack/castle recursion finite.
    if include_castling && !piece.has_moved && !is_king_in_check(board, en_passant_target, piece.color)
    {
        if can_castle(board, en_passant_target, from, 7, piece.color) {
            if let Some(to) = from.offset(0, 2) {
                out.push(CandidateMove::castle(to, CastleSide::Kingside));
            }
        }
        if can_castle(board, en_passant_target, from, 0, piece.color) {
            if let Some(to) = from.offset(0, -2) {
                out.push(CandidateMove::castle(to, CastleSide::Queenside));
            }
        }
    }
}

/// Castling eligibility toward the rook on `rook_col`: the rook must be an
/// unmoved own rook, every square strictly between king and rook empty, and
/// the king's current, transit, and landing squares unattacked.
fn can_castle(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    king_from: Square,
    rook_col: u8,
    color: Color,
) -> bool {
    let rook_square = Square {
        row: king_from.row,
        col: rook_col,
    };
    let Some(rook) = piece_at(board, rook_square) else {
        return false;
    };
    if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved {
        return false;
    }

    let step: i8 = if rook_col > king_from.col { 1 } else { -1 };
    let end_col = king_from.col as i8 + 2 * step;

    let mut col = king_from.col as i8 + step;
    while col != rook_col as i8 {
        let Some(between) = Square::new(king_from.row as i8, col) else {
            return false;
        };
        if piece_at(board, between).is_some() {
            return false;
        }
        col += step;
    }

    let enemy = color.opposite();
    let mut col = king_from.col as i8;
    loop {
        let Some(path_square) = Square::new(king_from.row as i8, col) else {
            return false;
        };
        if is_square_attacked(board, en_passant_target, path_square, enemy) {
            return false;
        }
        if col == end_col {
            break;
        }
        col += step;
    }

    true
}
