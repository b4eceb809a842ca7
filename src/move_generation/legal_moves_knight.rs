use crate::game_state::chess_types::{BoardGrid, Piece, Square};
use crate::move_generation::legal_move_shared::step_moves;
use crate::moves::move_descriptions::CandidateMove;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(
    board: &BoardGrid,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    step_moves(board, from, piece.color, &KNIGHT_OFFSETS, out);
}
