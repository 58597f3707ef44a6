//! Error types for the engine.

use thiserror::Error;

use super::action::Action;

/// Why a move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveRejection {
    /// The target cell already holds a mark.
    Occupied,
    /// Row or column is outside 0..3.
    OutOfBounds,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::Occupied => write!(f, "cell is already occupied"),
            MoveRejection::OutOfBounds => write!(f, "position is off the board"),
        }
    }
}

/// Main error type for the engine.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move {action}: {reason}")]
    InvalidMove {
        action: Action,
        reason: MoveRejection,
    },

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("game record does not replay at ply {ply}: {reason}")]
    ReplayMismatch { ply: usize, reason: String },

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl Error {
    /// Whether this is an illegal-move error.
    #[must_use]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

/// Convenience alias for results using the crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_message() {
        let err = Error::InvalidMove {
            action: Action::new(1, 2),
            reason: MoveRejection::Occupied,
        };
        assert_eq!(err.to_string(), "invalid move (1, 2): cell is already occupied");
        assert!(err.is_invalid_move());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::InvalidMove {
            action: Action::new(3, 0),
            reason: MoveRejection::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid move (3, 0): position is off the board");
    }

    #[test]
    fn test_other_errors_are_not_invalid_move() {
        let err = Error::InvalidBoard {
            reason: "too short".to_string(),
        };
        assert!(!err.is_invalid_move());
        assert_eq!(err.to_string(), "invalid board: too short");
    }
}
