use crate::game_state::chess_types::{BoardGrid, Piece, Square};
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::move_descriptions::CandidateMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn generate_rook_moves(
    board: &BoardGrid,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    slide_moves(board, from, piece.color, &ROOK_DIRECTIONS, out);
}
