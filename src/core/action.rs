//! # Actions
//!
//! Everything that can happen in a game becomes an `Action`.
//! User clicks a cell? That's `Action::CellActivated(index)`.
//! User picks a row in the move list? That's `Action::HistoryStepActivated(step)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state in place. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Invalid input (an occupied cell, a finished game, a step that does not
//! exist) is ignored: the state stays exactly as it was.

use log::{debug, warn};

use crate::core::error::GameError;
use crate::core::state::Game;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// A grid cell was activated.
    CellActivated(usize),
    /// A move list row was activated.
    HistoryStepActivated(usize),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(game: &mut Game, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CellActivated(index) => {
            if let Err(e) = game.apply_move(index) {
                debug!("Ignoring cell {index}: {e}");
            }
            Effect::None
        }
        Action::HistoryStepActivated(step) => {
            match game.jump_to(step) {
                Ok(()) => {}
                Err(e @ GameError::StepOutOfRange { .. }) => warn!("Ignoring jump: {e}"),
                Err(e) => debug!("Ignoring jump: {e}"),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
