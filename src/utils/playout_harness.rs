//! Seeded random playout harness for local diagnostics and testing.
//!
//! Drives full games through the public command API with uniformly random
//! legal moves, without any I/O. Deterministic for a given seed, which makes
//! failures reproducible.

use rand::{rngs::StdRng, seq::IndexedRandom, SeedableRng};

use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    CheckmateWin(Color),
    DrawStalemate,
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: u16,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 300,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub plies: u16,
    pub final_state: GameState,
}

/// Every legal `(from, to)` pair for the side to move.
pub fn collect_legal_moves(game: &GameState) -> Vec<(Square, Square)> {
    let mut options = Vec::new();
    for row in 0..8u8 {
        for col in 0..8u8 {
            let square = Square { row, col };
            match game.piece_at(square) {
                Some(piece) if piece.color == game.current_turn => {
                    for candidate in game.legal_moves(square) {
                        options.push((square, candidate.to));
                    }
                }
                _ => {}
            }
        }
    }
    options
}

/// Plays uniformly random legal moves from the starting position until the
/// game ends or the ply cap is hit. Promotions pick a random valid piece.
pub fn run_random_playout(config: &PlayoutConfig) -> PlayoutResult {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = GameState::new_game();
    let mut plies = 0u16;

    while plies < config.max_plies && !game.game_over {
        let options = collect_legal_moves(&game);
        let Some(&(from, to)) = options.choose(&mut rng) else {
            break;
        };
        if game.attempt_move(from, to) == MoveOutcome::AwaitingPromotion {
            let choice = PROMOTION_CHOICES
                .choose(&mut rng)
                .copied()
                .unwrap_or(PieceKind::Queen);
            game.choose_promotion(choice);
        }
        plies += 1;
    }

    let outcome = if game.is_checkmate {
        PlayoutOutcome::CheckmateWin(game.current_turn.opposite())
    } else if game.is_stalemate {
        PlayoutOutcome::DrawStalemate
    } else {
        PlayoutOutcome::PlyLimit
    };

    PlayoutResult {
        outcome,
        plies,
        final_state: game,
    }
}
