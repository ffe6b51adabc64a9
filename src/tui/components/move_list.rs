//! # MoveList Component
//!
//! The "Go to move #n" list beside the board. Activating a row emits
//! `MoveListEvent::Jump(step)`, which the event loop turns into
//! `Action::HistoryStepActivated(step)`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MoveListState` lives in `TuiState`
//! - `MoveList` is created each frame with the move entries as props

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::view::MoveEntry;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveListEvent {
    Jump(usize),
}

/// Persistent state for the move list.
#[derive(Debug, Default)]
pub struct MoveListState {
    pub selected: usize,
    pub list_state: ListState,
    /// Number of entries shown last frame.
    pub len: usize,
    /// Inner (borderless) area of the list last frame, for hit testing.
    pub area: Rect,
}

impl MoveListState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
            len: 1,
            area: Rect::default(),
        }
    }

    /// Move the selection to `step`, e.g. after the game's step pointer moved.
    pub fn follow(&mut self, step: usize, len: usize) {
        self.len = len;
        self.selected = step.min(len.saturating_sub(1));
        self.list_state.select(Some(self.selected));
    }

    /// Which entry a screen position falls on, if any.
    fn hit_test(&self, col: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(col, row)) {
            return None;
        }
        let index = usize::from(row - self.area.y) + self.list_state.offset();
        (index < self.len).then_some(index)
    }
}

impl EventHandler for MoveListState {
    type Event = MoveListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MoveListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                if self.len > 0 {
                    self.selected = (self.selected + 1).min(self.len - 1);
                    self.list_state.select(Some(self.selected));
                }
                None
            }
            TuiEvent::Submit if self.selected < self.len => {
                Some(MoveListEvent::Jump(self.selected))
            }
            TuiEvent::MouseClick(col, row) => {
                let index = self.hit_test(*col, *row)?;
                self.selected = index;
                self.list_state.select(Some(index));
                Some(MoveListEvent::Jump(index))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the move list.
pub struct MoveList<'a> {
    state: &'a mut MoveListState,
    moves: &'a [MoveEntry],
    focused: bool,
}

impl<'a> MoveList<'a> {
    pub fn new(state: &'a mut MoveListState, moves: &'a [MoveEntry], focused: bool) -> Self {
        Self {
            state,
            moves,
            focused,
        }
    }
}

impl Component for MoveList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(" Moves ")
            .border_style(border_style);
        self.state.area = block.inner(area);
        self.state.len = self.moves.len();

        let items: Vec<ListItem> = self
            .moves
            .iter()
            .map(|entry| {
                let (marker, style) = if entry.is_current {
                    ("• ", Style::default().add_modifier(Modifier::BOLD))
                } else {
                    ("  ", Style::default().fg(Color::Gray))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(entry.label.as_str(), style),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
