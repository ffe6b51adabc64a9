//! # View
//!
//! Read-only projection of a [`Game`] for whatever adapter is drawing it.
//! Adapters render this and send back `Action`s; they never reach into
//! `Game` directly.

use crate::core::board::{Board, Outcome, SIDE};
use crate::core::state::Game;

/// One row of the move list. Activating it jumps to `step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub board: Board,
    pub status: String,
    pub moves: Vec<MoveEntry>,
}

impl Game {
    pub fn view(&self) -> View {
        View {
            board: *self.board(),
            status: self.status_text(),
            moves: self.move_list(),
        }
    }

    /// `"Tie"`, `"<mark> won!"`, or `"Next player: <mark>"`.
    pub fn status_text(&self) -> String {
        match self.winner() {
            Some(Outcome::Tie) => "Tie".to_string(),
            Some(Outcome::Won(mark)) => format!("{mark} won!"),
            None => format!("Next player: {}", self.next_mark()),
        }
    }

    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history()
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let label = match entry.played {
                    Some(cell) => {
                        let (row, col) = (cell / SIDE + 1, cell % SIDE + 1);
                        match entry.board.get(cell) {
                            Some(mark) => {
                                format!("Go to move #{step} ({mark} at row {row}, col {col})")
                            }
                            None => format!("Go to move #{step}"),
                        }
                    }
                    None => "Go to game start".to_string(),
                };
                MoveEntry {
                    step,
                    label,
                    is_current: step == self.step(),
                }
            })
            .collect()
    }
}
