//! Error types for the morris crate

use thiserror::Error;

/// Main error type for the morris crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("position index {index} is out of bounds (must be 0-8)")]
    InvalidPositionIndex { index: usize },

    #[error("illegal move {mv} for side {side}: {reason}")]
    IllegalMove {
        mv: String,
        side: String,
        reason: String,
    },

    #[error("game already over")]
    GameOver,

    #[error("{side} has no legal moves in position '{board}'")]
    NoLegalMoves { side: String, board: String },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: A={a_count}, B={b_count} (each side must have exactly {expected})")]
    InvalidPieceCounts {
        a_count: usize,
        b_count: usize,
        expected: usize,
    },

    #[error("invalid side '{input}' (expected 'a' or 'b')")]
    ParseSide { input: String },

    #[error("invalid position '{input}' (expected 'row,col' or a single index 0-8)")]
    ParsePosition { input: String },

    #[error("invalid move '{input}' (expected 'from-to', e.g. '2,1-1,1' or '7-4')")]
    ParseMove { input: String },

    #[error("invalid difficulty '{input}'. Expected one of: {expected}")]
    ParseDifficulty { input: String, expected: String },

    #[error("invalid strategy '{input}'. Expected one of: {expected}")]
    ParseStrategy { input: String, expected: String },

    #[error("invalid mobility model '{input}'. Expected one of: {expected}")]
    ParseMobilityModel { input: String, expected: String },

    #[error("invalid win rule '{input}'. Expected one of: {expected}")]
    ParseWinRule { input: String, expected: String },

    #[error("invalid blocked policy '{input}'. Expected one of: {expected}")]
    ParseBlockedPolicy { input: String, expected: String },

    #[error("invalid player spec '{input}': {reason}")]
    ParsePlayerSpec { input: String, reason: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("observer lock poisoned during {event}")]
    ObserverPoisoned { event: &'static str },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
