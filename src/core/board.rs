//! # Board
//!
//! The 3×3 grid and the winner check.
//!
//! ```text
//!  0 | 1 | 2
//! -----------
//!  3 | 4 | 5
//! -----------
//!  6 | 7 | 8
//! ```
//!
//! Cells are stored row-major, so `index = row * 3 + col`.

use std::fmt;
use std::str::FromStr;

use crate::WinScan;
use crate::core::error::GameError;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Side length of the board.
pub const SIDE: usize = 3;

/// Every winning line, rows first, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const MAIN_DIAGONAL: [usize; 3] = [0, 4, 8];
const ANTI_DIAGONAL: [usize; 3] = [2, 4, 6];

/// A player's symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(GameError::InvalidMark(other.to_string())),
        }
    }
}

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Tie,
}

/// Nine cells, each empty or holding a mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The mark at `index`, or `None` if the cell is empty or off the board.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Returns a copy with `mark` placed at `index`.
    ///
    /// Callers check bounds and occupancy first; the session never overwrites.
    pub(crate) fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = Some(mark);
        next
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// The mark owning all three cells of `line`, if any.
    fn line_owner(&self, line: [usize; 3]) -> Option<Mark> {
        let first = self.cells[line[0]]?;
        (self.cells[line[1]] == Some(first) && self.cells[line[2]] == Some(first)).then_some(first)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * SIDE + col] {
                    Some(mark) => write!(f, " {mark} ")?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Decide the result of the position reached by playing `last_played`.
///
/// With [`WinScan::Scoped`] only the row and column through `last_played` are
/// checked, while both diagonals are always checked. [`WinScan::Full`] checks
/// every line. Both agree on any position reachable through legal play.
///
/// `None` for `last_played` (the initial board) or an index off the board
/// yields no result.
pub fn evaluate_winner(board: &Board, last_played: Option<usize>, scan: WinScan) -> Option<Outcome> {
    let index = last_played.filter(|&i| i < CELLS)?;

    let winner = match scan {
        WinScan::Scoped => {
            let row_start = index / SIDE * SIDE;
            let col_start = index % SIDE;
            [
                [row_start, row_start + 1, row_start + 2],
                [col_start, col_start + SIDE, col_start + 2 * SIDE],
                MAIN_DIAGONAL,
                ANTI_DIAGONAL,
            ]
            .into_iter()
            .find_map(|line| board.line_owner(line))
        }
        WinScan::Full => LINES.into_iter().find_map(|line| board.line_owner(line)),
    };

    match winner {
        Some(mark) => Some(Outcome::Won(mark)),
        None if board.is_full() => Some(Outcome::Tie),
        None => None,
    }
}
