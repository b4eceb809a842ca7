//! Errors used by the engine's parsing utilities.
//!
//! Gameplay rejections are deliberately not errors: an illegal move is an
//! expected, frequent input in interactive play and is reported through
//! `MoveOutcome` values with no state change. `ChessErrors` covers the cases
//! where a caller hands the crate malformed text, currently the algebraic
//! coordinate parser in `utils::algebraic`.

use std::error::Error;
use std::fmt;

/// Canonical error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A single character used during algebraic parsing was invalid, for
    /// example a file outside 'a'..'h' or a rank outside '1'..'8'.
    InvalidAlgebraicChar(char),

    /// An algebraic coordinate string had the wrong shape to be a square.
    InvalidAlgebraicString(String),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character: {ch}")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic square: {text}")
            }
        }
    }
}

impl Error for ChessErrors {}
