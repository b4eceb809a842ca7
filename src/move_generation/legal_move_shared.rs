use crate::game_state::chess_types::{BoardGrid, Color, Piece, Square};
use crate::moves::move_descriptions::CandidateMove;

#[inline]
pub fn piece_at(board: &BoardGrid, square: Square) -> Option<Piece> {
    board[square.row as usize][square.col as usize]
}

/// Walk each direction until blocked: empty squares are quiet moves, the
/// first enemy piece is a capture, an own piece ends the ray short.
pub fn slide_moves(
    board: &BoardGrid,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<CandidateMove>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match piece_at(board, next) {
                None => out.push(CandidateMove::quiet(next)),
                Some(target) => {
                    if target.color != color {
                        out.push(CandidateMove::capture(next));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Fixed-offset jumps landing on empty or enemy squares (knight and king).
pub fn step_moves(
    board: &BoardGrid,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    out: &mut Vec<CandidateMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match piece_at(board, to) {
            None => out.push(CandidateMove::quiet(to)),
            Some(target) if target.color != color => out.push(CandidateMove::capture(to)),
            Some(_) => {}
        }
    }
}
