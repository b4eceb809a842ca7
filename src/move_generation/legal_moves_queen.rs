use crate::game_state::chess_types::{BoardGrid, Piece, Square};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::CandidateMove;

pub fn generate_queen_moves(
    board: &BoardGrid,
    from: Square,
    piece: Piece,
    out: &mut Vec<CandidateMove>,
) {
    generate_rook_moves(board, from, piece, out);
    generate_bishop_moves(board, from, piece, out);
}
