//! Central game state and the command API consumed by presentation layers.
//!
//! `GameState` is the single mutable aggregate the engine owns: the mailbox
//! board, the side to move, the reversible move history, captured material,
//! en-passant state, the terminal flags, and the promotion suspension. All
//! commands are synchronous and atomic; independent games are simply
//! independent `GameState` values.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::{piece_value, starting_board};
use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::game_state::undo_state::{MoveRecord, PendingPromotion};
use crate::move_generation::legal_move_apply::{apply_promotion, execute_move, undo_move};
use crate::move_generation::legal_move_generator::generate_moves;
use crate::moves::move_descriptions::{CandidateMove, MoveOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: BoardGrid,
    pub current_turn: Color,
    /// Append-only during play, pop-only during undo.
    pub move_history: Vec<MoveRecord>,
    /// Captured pieces indexed by the captured piece's color.
    pub captured_pieces: [Vec<Piece>; 2],
    /// Most recently executed move, for highlighting.
    pub last_move: Option<(Square, Square)>,
    /// Square a pawn may capture into en passant, armed for one move only.
    pub en_passant_target: Option<Square>,
    pub is_check: bool,
    pub is_checkmate: bool,
    pub is_stalemate: bool,
    pub game_over: bool,
    /// Non-empty only while a promotion choice is awaited; blocks all input.
    pub pending_promotion: Option<PendingPromotion>,
    pub selected_square: Option<Square>,
    pub valid_moves: Vec<CandidateMove>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Fresh game in the standard starting position, white to move.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            current_turn: Color::White,
            move_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            last_move: None,
            en_passant_target: None,
            is_check: false,
            is_checkmate: false,
            is_stalemate: false,
            game_over: false,
            pending_promotion: None,
            selected_square: None,
            valid_moves: Vec::new(),
        }
    }

    /// Replaces the state wholesale, the "new game" command.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    pub fn clear_selection(&mut self) {
        self.selected_square = None;
        self.valid_moves.clear();
    }

    /// Legal moves for the piece on `square`, for populating move-indicator
    /// UI. Empty unless the square holds a piece of the side to move and the
    /// engine is accepting input.
    pub fn legal_moves(&self, square: Square) -> Vec<CandidateMove> {
        if self.game_over || self.pending_promotion.is_some() {
            return Vec::new();
        }
        match self.piece_at(square) {
            Some(piece) if piece.color == self.current_turn => {
                generate_moves(self, square, true)
            }
            _ => Vec::new(),
        }
    }

    /// Selection management: selecting an own piece computes its legal
    /// moves, re-selecting the same square deselects, anything else clears
    /// the selection. Returns the moves of the current selection.
    pub fn select_square(&mut self, square: Square) -> &[CandidateMove] {
        if self.game_over || self.pending_promotion.is_some() {
            return &[];
        }
        if self.selected_square == Some(square) {
            self.clear_selection();
            return &[];
        }
        match self.piece_at(square) {
            Some(piece) if piece.color == self.current_turn => {
                let moves = generate_moves(self, square, true);
                self.valid_moves = moves;
                self.selected_square = Some(square);
            }
            _ => self.clear_selection(),
        }
        &self.valid_moves
    }

    /// Executes the move from `from` to `to` if it is legal. Rejections
    /// leave the state untouched; input while the game is over or a
    /// promotion is pending is ignored.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.game_over || self.pending_promotion.is_some() {
            return MoveOutcome::Ignored;
        }
        let Some(piece) = self.piece_at(from) else {
            return MoveOutcome::Rejected;
        };
        if piece.color != self.current_turn {
            return MoveOutcome::Rejected;
        }
        let candidates = generate_moves(self, from, true);
        let Some(candidate) = candidates.into_iter().find(|m| m.to == to) else {
            return MoveOutcome::Rejected;
        };
        execute_move(self, from, to, &candidate)
    }

    /// Supplies the promotion piece for a suspended move.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> MoveOutcome {
        apply_promotion(self, kind)
    }

    /// Reverts the most recent move. Returns false when the history is empty
    /// or a promotion choice is pending.
    pub fn undo(&mut self) -> bool {
        undo_move(self)
    }

    /// Pieces captured by `color`, in capture order.
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured_pieces[color.opposite().index()]
    }

    /// Material balance of captured pieces; positive favors white.
    pub fn material_advantage(&self) -> i32 {
        let white_gain: i32 = self.captured_pieces[Color::Black.index()]
            .iter()
            .map(|p| piece_value(p.kind) as i32)
            .sum();
        let black_gain: i32 = self.captured_pieces[Color::White.index()]
            .iter()
            .map(|p| piece_value(p.kind) as i32)
            .sum();
        white_gain - black_gain
    }

    /// Algebraic notation of the history, in play order.
    pub fn notation_history(&self) -> Vec<&str> {
        self.move_history
            .iter()
            .map(|record| record.notation.as_str())
            .collect()
    }
}
