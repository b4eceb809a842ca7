//! Crate root module declarations for the Arbiter Chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! notation and utility helpers) so tests, benches, and external tooling can
//! import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod utils {
    pub mod algebraic;
    pub mod notation;
    pub mod playout_harness;
    pub mod render_game_state;
}
