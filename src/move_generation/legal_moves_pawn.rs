use crate::game_state::chess_types::{BoardGrid, Piece, Square};
use crate::move_generation::legal_move_shared::piece_at;
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_pawn_moves(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    let forward = piece.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if piece_at(board, one_step).is_none() {
            out.push(CandidateMove::quiet(one_step));

            if from.row == piece.color.pawn_start_row() {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if piece_at(board, two_step).is_none() {
                        out.push(CandidateMove::double_pawn(two_step));
                    }
                }
            }
        }
    }

    // Diagonal captures.
    for d_col in [-1i8, 1] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };
        if let Some(target) = piece_at(board, to) {
            if target.color != piece.color {
                out.push(CandidateMove::capture(to));
            }
        }
    }

    // En passant: the target square is only armed for the single reply to a
    // double push, and the pawn must sit directly beside it.
    if let Some(target) = en_passant_target {
        if from.row as i8 + forward == target.row as i8
            && (from.col as i8 - target.col as i8).abs() == 1
        {
            out.push(CandidateMove::en_passant(target));
        }
    }
}
