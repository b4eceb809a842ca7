//! Move execution, finalization, promotion, and undo.
//!
//! These free functions hold the full execution contract; the `GameState`
//! command API validates input and delegates here. Every operation is a
//! complete synchronous transaction against the single owned state.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::{EnPassantCapture, MoveRecord, PendingPromotion, RookRelocation};
use crate::move_generation::legal_move_checks::{has_any_legal_moves, is_king_in_check};
use crate::moves::move_descriptions::{CandidateMove, CastleSide, MoveOutcome};
use crate::utils::notation::base_notation;

/// Applies a chosen legal move. A pawn reaching the far rank suspends into
/// `AwaitingPromotion` without flipping the turn; everything else finalizes
/// immediately.
pub fn execute_move(
    state: &mut GameState,
    from: Square,
    to: Square,
    candidate: &CandidateMove,
) -> MoveOutcome {
    let Some(piece) = state.piece_at(from) else {
        return MoveOutcome::Rejected;
    };
    let captured = state.piece_at(to);

    let mut record = MoveRecord {
        piece,
        from,
        to,
        captured,
        en_passant_capture: None,
        rook_relocation: None,
        castling: candidate.castling,
        is_en_passant: candidate.is_en_passant,
        is_double_pawn: candidate.is_double_pawn,
        was_check: state.is_check,
        prev_en_passant_target: state.en_passant_target,
        promotion: None,
        notation: String::new(),
    };
    // Notation (including disambiguation) is built from the pre-move
    // position; check and promotion suffixes are appended at finalization.
    record.notation = base_notation(state, piece, from, to, captured, candidate);

    if let Some(victim) = captured {
        state.captured_pieces[victim.color.index()].push(victim);
    }

    // En-passant victim sits behind the destination in the mover's direction.
    if candidate.is_en_passant {
        if let Some(victim_square) = to.offset(-piece.color.forward(), 0) {
            if let Some(victim) = state.piece_at(victim_square) {
                record.en_passant_capture = Some(EnPassantCapture {
                    piece: victim,
                    square: victim_square,
                });
                state.captured_pieces[victim.color.index()].push(victim);
                state.set_piece(victim_square, None);
            }
        }
    }

    let mut moved = piece;
    moved.has_moved = true;
    state.set_piece(to, Some(moved));
    state.set_piece(from, None);

    if let Some(side) = candidate.castling {
        let rook_from = Square {
            row: from.row,
            col: match side {
                CastleSide::Kingside => 7,
                CastleSide::Queenside => 0,
            },
        };
        let rook_to = Square {
            row: from.row,
            col: match side {
                CastleSide::Kingside => to.col - 1,
                CastleSide::Queenside => to.col + 1,
            },
        };
        if let Some(mut rook) = state.piece_at(rook_from) {
            rook.has_moved = true;
            state.set_piece(rook_to, Some(rook));
            state.set_piece(rook_from, None);
            record.rook_relocation = Some(RookRelocation {
                from: rook_from,
                to: rook_to,
            });
        }
    }

    state.en_passant_target = None;
    if candidate.is_double_pawn {
        // The skipped-over square, valid only for the immediate reply.
        state.en_passant_target = to.offset(-piece.color.forward(), 0);
    }

    if piece.kind == PieceKind::Pawn && to.row == piece.color.promotion_row() {
        state.pending_promotion = Some(PendingPromotion { square: to, record });
        return MoveOutcome::AwaitingPromotion;
    }

    finish_move(state, record);
    MoveOutcome::Completed
}

/// Supplies the promotion choice for a suspended move. Pawn and king are not
/// valid choices; the engine stays suspended until a valid kind arrives.
pub fn apply_promotion(state: &mut GameState, kind: PieceKind) -> MoveOutcome {
    if state.pending_promotion.is_none() {
        return MoveOutcome::Ignored;
    }
    if matches!(kind, PieceKind::Pawn | PieceKind::King) {
        return MoveOutcome::Rejected;
    }
    let Some(pending) = state.pending_promotion.take() else {
        return MoveOutcome::Ignored;
    };

    let mut record = pending.record;
    state.set_piece(
        pending.square,
        Some(Piece {
            kind,
            color: record.piece.color,
            has_moved: true,
        }),
    );
    record.promotion = Some(kind);

    finish_move(state, record);
    MoveOutcome::Completed
}

/// Finalizes an executed move: completes the notation, flips the turn, and
/// recomputes check, checkmate, and stalemate for the side about to move.
pub fn finish_move(state: &mut GameState, mut record: MoveRecord) {
    if let Some(kind) = record.promotion {
        if let Some(letter) = kind.san_letter() {
            record.notation.push('=');
            record.notation.push(letter);
        }
    }

    state.last_move = Some((record.from, record.to));
    state.current_turn = state.current_turn.opposite();
    state.is_check = is_king_in_check(&state.board, state.en_passant_target, state.current_turn);

    if !has_any_legal_moves(state, state.current_turn) {
        if state.is_check {
            state.is_checkmate = true;
            record.notation.push('#');
        } else {
            state.is_stalemate = true;
        }
        state.game_over = true;
        log::info!(
            "game over after {}: checkmate={} stalemate={}",
            record.notation,
            state.is_checkmate,
            state.is_stalemate
        );
    } else if state.is_check {
        record.notation.push('+');
    }

    log::debug!("executed {}", record.notation);
    state.move_history.push(record);
    state.clear_selection();
}

/// Pops the most recent record and reverses execution exactly, restoring the
/// pre-move piece snapshot (and with it the prior `has_moved`), any captured
/// piece, the en-passant state, the rook relocation, the turn, and the check
/// and terminal flags. Returns false on empty history or while a promotion
/// choice is pending.
pub fn undo_move(state: &mut GameState) -> bool {
    if state.pending_promotion.is_some() {
        return false;
    }
    let Some(record) = state.move_history.pop() else {
        return false;
    };

    // The snapshot still has the pre-move `has_moved`, and for a promotion it
    // is still the pawn, so one restore covers both.
    state.set_piece(record.from, Some(record.piece));
    state.set_piece(record.to, record.captured);
    if let Some(victim) = record.captured {
        state.captured_pieces[victim.color.index()].pop();
    }

    if let Some(en_passant) = record.en_passant_capture {
        state.set_piece(en_passant.square, Some(en_passant.piece));
        state.captured_pieces[en_passant.piece.color.index()].pop();
    }

    if let Some(relocation) = record.rook_relocation {
        if let Some(mut rook) = state.piece_at(relocation.to) {
            // A legal castle implies the rook had never moved.
            rook.has_moved = false;
            state.set_piece(relocation.from, Some(rook));
            state.set_piece(relocation.to, None);
        }
    }

    state.en_passant_target = record.prev_en_passant_target;
    state.current_turn = state.current_turn.opposite();
    state.last_move = state
        .move_history
        .last()
        .map(|previous| (previous.from, previous.to));

    state.is_check = record.was_check;
    state.is_checkmate = false;
    state.is_stalemate = false;
    state.game_over = false;
    state.clear_selection();

    log::debug!("undid {}", record.notation);
    true
}
