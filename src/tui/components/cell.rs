//! # Cell Component
//!
//! One square of the grid. Purely presentational: it shows a mark (or
//! nothing) and reports a click inside its own area. It does not know its
//! index; the Grid attaches that.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::board::Mark;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Emitted when the cell is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEvent {
    Activated,
}

pub struct Cell {
    pub value: Option<Mark>,
    /// Keyboard cursor is on this cell.
    pub selected: bool,
    /// Where the cell was last drawn.
    pub area: Rect,
}

impl Cell {
    pub fn new(value: Option<Mark>, selected: bool, area: Rect) -> Self {
        Self {
            value,
            selected,
            area,
        }
    }
}

pub fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(Color::Cyan),
        Mark::O => Style::default().fg(Color::Yellow),
    }
    .add_modifier(Modifier::BOLD)
}

impl Component for Cell {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = area;

        let border_style = if self.selected {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let border_type = if self.selected {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style);

        let (text, style) = match self.value {
            Some(mark) => (mark.to_string(), mark_style(mark)),
            None => (String::new(), Style::default()),
        };

        // Vertically centre the mark inside the border
        let inner_height = area.height.saturating_sub(2);
        let mut lines = vec![String::new(); usize::from(inner_height.saturating_sub(1) / 2)];
        lines.push(text);

        let paragraph = Paragraph::new(lines.join("\n"))
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

impl EventHandler for Cell {
    type Event = CellEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CellEvent> {
        match event {
            TuiEvent::MouseClick(col, row) if self.area.contains(Position::new(*col, *row)) => {
                Some(CellEvent::Activated)
            }
            _ => None,
        }
    }
}
