//! # Game Errors
//!
//! Reasons the session declined an input. None of these are fatal: the
//! reducer logs them and leaves the game untouched.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Cell index outside 0..9.
    CellOutOfRange(usize),
    /// The cell already holds a mark.
    CellOccupied(usize),
    /// A winner (or tie) is already decided on this branch of history.
    GameOver,
    /// History step that does not exist.
    StepOutOfRange { step: usize, len: usize },
    InvalidMark(String),
    InvalidWinScan(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::CellOutOfRange(i) => write!(f, "cell {i} is outside the board"),
            GameError::CellOccupied(i) => write!(f, "cell {i} is already taken"),
            GameError::GameOver => write!(f, "game is already decided"),
            GameError::StepOutOfRange { step, len } => {
                write!(f, "history step {step} out of range (history has {len} entries)")
            }
            GameError::InvalidMark(s) => write!(f, "invalid mark '{s}', expected X or O"),
            GameError::InvalidWinScan(s) => {
                write!(f, "invalid win scan '{s}', expected scoped or full")
            }
        }
    }
}

impl std::error::Error for GameError {}
