use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{generate_moves, pseudo_legal_moves};
use crate::move_generation::legal_move_shared::piece_at;
use crate::moves::move_descriptions::CandidateMove;

pub fn find_king(board: &BoardGrid, color: Color) -> Option<Square> {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square { row, col };
            if let Some(piece) = piece_at(board, square) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some(square);
                }
            }
        }
    }
    None
}

/// True if any piece of `by_color` has a pseudo-legal move landing on
/// `target`. Candidates are generated without the king-safety filter and
/// without castling. O(64 × per-piece cost) in the worst case, which is fine
/// for a move-at-a-time legality engine.
pub fn is_square_attacked(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    target: Square,
    by_color: Color,
) -> bool {
    let mut buffer = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square { row, col };
            let Some(piece) = piece_at(board, from) else {
                continue;
            };
            if piece.color != by_color {
                continue;
            }
            buffer.clear();
            pseudo_legal_moves(board, en_passant_target, from, piece, false, &mut buffer);
            if buffer.iter().any(|candidate| candidate.to == target) {
                return true;
            }
        }
    }
    false
}

/// Locates `color`'s king and asks whether the opposing side attacks it.
/// A board with no king reports "not in check"; normal play cannot reach it.
pub fn is_king_in_check(board: &BoardGrid, en_passant_target: Option<Square>, color: Color) -> bool {
    let Some(king) = find_king(board, color) else {
        return false;
    };
    is_square_attacked(board, en_passant_target, king, color.opposite())
}

/// Simulates `candidate` on a scratch copy of the board (the grid is a cheap
/// fixed-size copy) and reports whether the mover's own king would then be
/// attacked. An en-passant capture also removes the victim pawn from the
/// square behind the destination before testing.
pub fn would_leave_king_in_check(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    from: Square,
    piece: Piece,
    candidate: &CandidateMove,
) -> bool {
    let mut scratch = *board;
    scratch[candidate.to.row as usize][candidate.to.col as usize] = Some(piece);
    scratch[from.row as usize][from.col as usize] = None;

    if candidate.is_en_passant {
        if let Some(victim) = candidate.to.offset(-piece.color.forward(), 0) {
            scratch[victim.row as usize][victim.col as usize] = None;
        }
    }

    is_king_in_check(&scratch, en_passant_target, piece.color)
}

/// True iff `color` has at least one move surviving the king-safety filter.
/// Decides checkmate versus stalemate after every completed move.
pub fn has_any_legal_moves(state: &GameState, color: Color) -> bool {
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square { row, col };
            match state.piece_at(square) {
                Some(piece) if piece.color == color => {
                    if !generate_moves(state, square, true).is_empty() {
                        return true;
                    }
                }
                _ => {}
            }
        }
    }
    false
}
