use crate::game_state::chess_types::{BoardGrid, Piece, Square};
use crate::move_generation::legal_move_shared::slide_moves;
use crate::moves::move_descriptions::CandidateMove;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn generate_bishop_moves(
    board: &BoardGrid,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    slide_moves(board, from, piece.color, &BISHOP_DIRECTIONS, out);
}
