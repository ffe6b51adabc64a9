//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::state::Game;

/// A default game (O first, scoped scan) after playing `moves` in order.
///
/// Panics if any move is rejected, so tests only pass legal sequences.
pub fn played(moves: &[usize]) -> Game {
    let mut game = Game::default();
    for &index in moves {
        game.apply_move(index)
            .unwrap_or_else(|e| panic!("move {index} rejected: {e}"));
    }
    game
}

/// Everything drawn to a test terminal, concatenated row by row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}
