//! # Game Session
//!
//! The authoritative game state. Everything the screen shows is derived
//! from this struct.
//!
//! ```text
//! Game
//! ├── history: Vec<HistoryEntry>   // snapshots, history[0] is the empty board
//! ├── step: usize                  // which snapshot is current
//! ├── next: Mark                   // who plays next at `step`
//! ├── winner: Option<Outcome>      // result at `step`, if decided
//! ├── first: Mark                  // who opens the game
//! └── scan: WinScan                // which lines the winner check inspects
//! ```
//!
//! State changes only happen through `apply_move` and `jump_to`, normally
//! driven by `update(state, action)` in action.rs.

use log::debug;

use crate::WinScan;
use crate::core::board::{Board, CELLS, Mark, Outcome, evaluate_winner};
use crate::core::config::ResolvedConfig;
use crate::core::error::GameError;

/// Mark that opens a game unless configured otherwise.
pub const DEFAULT_FIRST_MARK: Mark = Mark::O;

/// A board snapshot and the cell played to reach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// `None` only for the initial empty board.
    pub played: Option<usize>,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            played: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    history: Vec<HistoryEntry>,
    step: usize,
    next: Mark,
    winner: Option<Outcome>,
    first: Mark,
    scan: WinScan,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST_MARK, WinScan::default())
    }
}

impl Game {
    pub fn new(first: Mark, scan: WinScan) -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
            next: first,
            winner: None,
            first,
            scan,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.first_mark, config.win_scan)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn next_mark(&self) -> Mark {
        self.next
    }

    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    pub fn first_mark(&self) -> Mark {
        self.first
    }

    pub fn win_scan(&self) -> WinScan {
        self.scan
    }

    /// The snapshot at the step pointer.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    pub fn board(&self) -> &Board {
        &self.current().board
    }

    /// Place the next mark at `index` on the current board.
    ///
    /// Any snapshots after the step pointer are discarded first, so playing
    /// after a jump back starts a new branch. On error nothing changes.
    pub fn apply_move(&mut self, index: usize) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if index >= CELLS {
            return Err(GameError::CellOutOfRange(index));
        }
        let board = self.board();
        if board.get(index).is_some() {
            return Err(GameError::CellOccupied(index));
        }

        let mark = self.next;
        let board = board.with_mark(index, mark);
        let winner = evaluate_winner(&board, Some(index), self.scan);

        self.history.truncate(self.step + 1);
        self.history.push(HistoryEntry {
            board,
            played: Some(index),
        });
        self.step = self.history.len() - 1;
        self.next = mark.opponent();
        self.winner = winner;

        debug!(
            "{mark} played cell {index} (step {}, winner {:?})\n{board}",
            self.step, self.winner
        );
        Ok(())
    }

    /// Move the step pointer to `step` without touching history.
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        let Some(entry) = self.history.get(step) else {
            return Err(GameError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        };

        self.winner = evaluate_winner(&entry.board, entry.played, self.scan);
        self.step = step;
        self.next = self.mark_for_step(step);

        debug!("Jumped to step {step} ({} next)", self.next);
        Ok(())
    }

    /// Whose turn it is at `step`: the opener on even steps.
    fn mark_for_step(&self, step: usize) -> Mark {
        if step % 2 == 0 {
            self.first
        } else {
            self.first.opponent()
        }
    }
}
