//! # Grid Component
//!
//! Lays out nine `Cell`s in three rows of three and turns their
//! payload-free activations into `GridEvent::Activated(index)`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GridState` lives in `TuiState` (keyboard cursor, cached cell areas)
//! - `Grid` is created each frame with the board as a prop
//!
//! Keyboard: arrows move the cursor, Enter/Space play the cursor cell,
//! `1`-`9` play a cell directly (numbered like the board indices, plus one).

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::core::board::{Board, CELLS, SIDE};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::cell::{Cell, CellEvent};
use crate::tui::event::TuiEvent;

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    Activated(usize),
}

/// Presentation state for the grid. Must be persisted in the parent TuiState.
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Cell under the keyboard cursor.
    pub cursor: usize,
    /// Where each cell was drawn last frame, for mouse hit testing.
    pub cell_areas: [Rect; CELLS],
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    fn activate(&mut self, index: usize) -> Option<GridEvent> {
        self.cursor = index;
        Some(GridEvent::Activated(index))
    }
}

impl EventHandler for GridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        let (row, col) = (self.cursor / SIDE, self.cursor % SIDE);
        match event {
            TuiEvent::CursorUp if row > 0 => self.cursor -= SIDE,
            TuiEvent::CursorDown if row + 1 < SIDE => self.cursor += SIDE,
            TuiEvent::CursorLeft if col > 0 => self.cursor -= 1,
            TuiEvent::CursorRight if col + 1 < SIDE => self.cursor += 1,
            TuiEvent::Submit => return self.activate(self.cursor),
            TuiEvent::InputChar(c @ '1'..='9') => {
                let index = c.to_digit(10).map_or(0, |d| d as usize - 1);
                return self.activate(index);
            }
            TuiEvent::MouseClick(..) => {
                let hit = self.cell_areas.iter().position(|&area| {
                    Cell::new(None, false, area).handle_event(event) == Some(CellEvent::Activated)
                });
                if let Some(index) = hit {
                    return self.activate(index);
                }
            }
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the grid.
pub struct Grid<'a> {
    state: &'a mut GridState,
    board: &'a Board,
    focused: bool,
}

impl<'a> Grid<'a> {
    pub fn new(state: &'a mut GridState, board: &'a Board, focused: bool) -> Self {
        Self {
            state,
            board,
            focused,
        }
    }

    /// Width and height the grid needs, including its border.
    pub fn required_size() -> (u16, u16) {
        (
            CELL_WIDTH * SIDE as u16 + 2,
            CELL_HEIGHT * SIDE as u16 + 2,
        )
    }
}

impl Component for Grid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (width, height) = Self::required_size();
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [grid_area] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(column);

        let border_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Board ")
            .border_style(border_style);
        let inner = block.inner(grid_area);
        frame.render_widget(block, grid_area);

        let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); SIDE]).split(inner);
        for (row, row_area) in rows.iter().enumerate() {
            let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); SIDE]).split(*row_area);
            for (col, cell_area) in cols.iter().enumerate() {
                let index = row * SIDE + col;
                let selected = self.focused && self.state.cursor == index;
                let mut cell = Cell::new(self.board.get(index), selected, *cell_area);
                cell.render(frame, *cell_area);
                self.state.cell_areas[index] = cell.area;
            }
        }
    }
}
