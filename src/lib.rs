//! tictac library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Which lines the winner check inspects after a move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum WinScan {
    /// Row and column through the last move, then both diagonals.
    #[default]
    Scoped,
    /// All eight lines, regardless of the last move.
    Full,
}

impl std::str::FromStr for WinScan {
    type Err = crate::core::error::GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| crate::core::error::GameError::InvalidWinScan(s.to_string()))
    }
}
