//! Error types for the rules engine
//!
//! Every rejection path in the engine returns one of these values; nothing
//! in ordinary play panics. The variants follow the order in which a move
//! request can fail:
//!
//! 1. [`ChessError::InvalidNotation`] - the text never reaches the board
//! 2. [`ChessError::IllegalMove`] - parsed, but resolution or the check test failed
//! 3. [`ChessError::InternalInconsistency`] - the board broke an invariant
//!
//! A rejected move always leaves the board exactly as it was.

use thiserror::Error;

use crate::game::GameStatus;

/// Errors that can occur in the rules engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Input does not parse to exactly one recognised move shape
    #[error("Invalid notation '{input}': {reason}")]
    InvalidNotation { input: String, reason: String },

    /// Move parsed but cannot be played in the current position
    #[error("Illegal move '{notation}': {reason}")]
    IllegalMove { notation: String, reason: String },

    /// Board state contradicts an engine invariant (missing king, missing rook)
    #[error("Internal inconsistency: {message}")]
    InternalInconsistency { message: String },

    /// A mutating call was made after the game reached a terminal state
    #[error("Game is over ({status:?})")]
    GameOver { status: GameStatus },

    /// The engine was asked for a move in a position with none
    #[error("No legal moves available")]
    NoLegalMoves,

    /// Draw offer handling called out of sequence
    #[error("Draw offer error: {message}")]
    DrawOffer { message: String },

    /// Engine configuration could not be read
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ChessError {
    pub(crate) fn invalid_notation(input: &str, reason: impl Into<String>) -> Self {
        ChessError::InvalidNotation {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn illegal(notation: impl Into<String>, reason: impl Into<String>) -> Self {
        ChessError::IllegalMove {
            notation: notation.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for engine operations
pub type ChessResult<T> = Result<T, ChessError>;
