use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::move_descriptions::CastleSide;

/// Pawn removed by an en-passant capture, with the square it stood on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassantCapture {
    pub piece: Piece,
    pub square: Square,
}

/// Rook displacement performed as part of castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RookRelocation {
    pub from: Square,
    pub to: Square,
}

/// Single reversible history entry for `execute_move` / `undo_move`.
///
/// `piece` is the snapshot taken before the move executed, so its
/// `has_moved` flag is the pre-move value; undo restores it verbatim. For a
/// promotion the snapshot is still the pawn, which makes the promotion
/// reversal fall out of the same restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Destination occupant before the move, if any.
    pub captured: Option<Piece>,
    pub en_passant_capture: Option<EnPassantCapture>,
    pub rook_relocation: Option<RookRelocation>,
    pub castling: Option<CastleSide>,
    pub is_en_passant: bool,
    pub is_double_pawn: bool,
    /// Check flag of the position before the move, restored on undo.
    pub was_check: bool,
    pub prev_en_passant_target: Option<Square>,
    pub promotion: Option<PieceKind>,
    pub notation: String,
}

/// Move suspended at the far rank until a promotion piece is chosen.
/// While present, every other command is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub square: Square,
    pub record: MoveRecord,
}
