//! Algebraic notation built from the pre-move position.
//!
//! Produces the body of a move's notation: piece letter, file/rank
//! disambiguation among same-kind pieces that could legally reach the same
//! destination, capture marks, and the castling tokens. Promotion and
//! check/checkmate suffixes are appended at finalization by the executor.
//! Best-effort display text, not a canonical PGN implementation.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::{CandidateMove, CastleSide};
use crate::utils::algebraic::square_to_algebraic;

/// Notation for a move about to be executed on `state`.
pub fn base_notation(
    state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
    captured: Option<Piece>,
    candidate: &CandidateMove,
) -> String {
    match candidate.castling {
        Some(CastleSide::Kingside) => return "O-O".to_owned(),
        Some(CastleSide::Queenside) => return "O-O-O".to_owned(),
        None => {}
    }

    let mut notation = String::new();
    if let Some(letter) = piece.kind.san_letter() {
        notation.push(letter);
    }

    if piece.kind != PieceKind::Pawn && piece.kind != PieceKind::King {
        let rivals = rival_origins(state, piece, from, to);
        if !rivals.is_empty() {
            let same_file = rivals.iter().any(|rival| rival.col == from.col);
            let same_rank = rivals.iter().any(|rival| rival.row == from.row);
            if !same_file {
                notation.push(file_char(from));
            } else if !same_rank {
                notation.push(rank_char(from));
            } else {
                notation.push(file_char(from));
                notation.push(rank_char(from));
            }
        }
    }

    let is_capture = captured.is_some() || candidate.is_en_passant;
    if piece.kind == PieceKind::Pawn && is_capture {
        notation.push(file_char(from));
    }
    if is_capture {
        notation.push('x');
    }

    notation.push_str(&square_to_algebraic(to));

    if candidate.is_en_passant {
        notation.push_str(" e.p.");
    }

    notation
}

/// Other same-kind, same-color pieces that could also legally reach `to`.
fn rival_origins(state: &GameState, piece: Piece, from: Square, to: Square) -> Vec<Square> {
    let mut rivals = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square { row, col };
            if square == from {
                continue;
            }
            let Some(other) = state.piece_at(square) else {
                continue;
            };
            if other.kind != piece.kind || other.color != piece.color {
                continue;
            }
            if generate_moves(state, square, true)
                .iter()
                .any(|candidate| candidate.to == to)
            {
                rivals.push(square);
            }
        }
    }
    rivals
}

fn file_char(square: Square) -> char {
    char::from(b'a' + square.col)
}

fn rank_char(square: Square) -> char {
    char::from(b'8' - square.row)
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::moves::move_descriptions::MoveOutcome;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn place(board: &mut BoardGrid, text: &str, kind: PieceKind, color: Color) {
        let square = sq(text);
        board[square.row as usize][square.col as usize] = Some(Piece::new(kind, color));
    }

    #[test]
    fn twin_knights_disambiguate_by_file() {
        let mut board: BoardGrid = [[None; 8]; 8];
        place(&mut board, "b1", PieceKind::Knight, Color::White);
        place(&mut board, "f1", PieceKind::Knight, Color::White);
        place(&mut board, "h1", PieceKind::King, Color::White);
        place(&mut board, "a8", PieceKind::King, Color::Black);
        let mut game = GameState {
            board,
            ..GameState::new_game()
        };

        assert_eq!(game.attempt_move(sq("b1"), sq("d2")), MoveOutcome::Completed);
        assert_eq!(game.notation_history().last(), Some(&"Nbd2"));
    }

    #[test]
    fn stacked_rooks_disambiguate_by_rank() {
        let mut board: BoardGrid = [[None; 8]; 8];
        place(&mut board, "a1", PieceKind::Rook, Color::White);
        place(&mut board, "a5", PieceKind::Rook, Color::White);
        place(&mut board, "e1", PieceKind::King, Color::White);
        place(&mut board, "e8", PieceKind::King, Color::Black);
        let mut game = GameState {
            board,
            ..GameState::new_game()
        };

        assert_eq!(game.attempt_move(sq("a1"), sq("a3")), MoveOutcome::Completed);
        assert_eq!(game.notation_history().last(), Some(&"R1a3"));
    }

    #[test]
    fn lone_pieces_carry_no_disambiguation() {
        let mut game = GameState::new_game();
        assert_eq!(game.attempt_move(sq("g1"), sq("f3")), MoveOutcome::Completed);
        assert_eq!(game.notation_history().last(), Some(&"Nf3"));
    }
}
