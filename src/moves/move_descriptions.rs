use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::Square;

/// Which wing a castling move belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Candidate destination produced by move generation.
///
/// The flags describe how the move must be executed: an en-passant capture
/// removes a pawn from a square other than `to`, a double pawn push arms the
/// en-passant target, and a castling move drags the rook along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    pub to: Square,
    pub is_capture: bool,
    pub is_en_passant: bool,
    pub is_double_pawn: bool,
    pub castling: Option<CastleSide>,
}

impl CandidateMove {
    #[inline]
    pub fn quiet(to: Square) -> Self {
        Self {
            to,
            is_capture: false,
            is_en_passant: false,
            is_double_pawn: false,
            castling: None,
        }
    }

    #[inline]
    pub fn capture(to: Square) -> Self {
        Self {
            is_capture: true,
            ..Self::quiet(to)
        }
    }

    #[inline]
    pub fn double_pawn(to: Square) -> Self {
        Self {
            is_double_pawn: true,
            ..Self::quiet(to)
        }
    }

    #[inline]
    pub fn en_passant(to: Square) -> Self {
        Self {
            is_capture: true,
            is_en_passant: true,
            ..Self::quiet(to)
        }
    }

    #[inline]
    pub fn castle(to: Square, side: CastleSide) -> Self {
        Self {
            castling: Some(side),
            ..Self::quiet(to)
        }
    }
}

/// Result of a gameplay command.
///
/// Illegal input is an expected, frequent event in interactive play, so it is
/// reported as a value rather than an error: `Rejected` means the move is not
/// in the legal list and nothing changed, `Ignored` means the engine is not
/// accepting input (game over, or a promotion choice is pending).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Completed,
    AwaitingPromotion,
    Rejected,
    Ignored,
}
