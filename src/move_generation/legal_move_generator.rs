//! Legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation, then filters out candidates
//! that would leave the mover's own king attacked by simulating each one on a
//! scratch copy of the board.

use crate::game_state::chess_types::{BoardGrid, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::would_leave_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::CandidateMove;

/// Pseudo-legal candidates for the piece standing on `from`, appended to
/// `out`. `include_castling` is off for attack queries.
pub fn pseudo_legal_moves(
    board: &BoardGrid,
    en_passant_target: Option<Square>,
    from: Square,
    piece: Piece,
    include_castling: bool,
    out: &mut Vec<CandidateMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, en_passant_target, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, out),
        PieceKind::King => {
            generate_king_moves(board, en_passant_target, from, piece, include_castling, out)
        }
    }
}

/// Candidate moves for the piece on `from`; an empty square yields an empty
/// list. With `verify_king_safety` every candidate is simulated and dropped
/// if the mover's king would be left attacked.
pub fn generate_moves(
    state: &GameState,
    from: Square,
    verify_king_safety: bool,
) -> Vec<CandidateMove> {
    let Some(piece) = state.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    pseudo_legal_moves(
        &state.board,
        state.en_passant_target,
        from,
        piece,
        verify_king_safety,
        &mut moves,
    );

    if verify_king_safety {
        moves.retain(|candidate| {
            !would_leave_king_in_check(&state.board, state.en_passant_target, from, piece, candidate)
        });
    }

    moves
}
