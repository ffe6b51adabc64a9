//! # StatusBar Component
//!
//! Top line of the screen: the game status ("Next player: X", "O won!",
//! "Tie"), plus a note when the board shown is not the latest move.
//!
//! Stateless: all data arrives as props.
//!
//! 1. **Latest move**: `"tictac | Next player: X"`
//! 2. **Viewing history**: `"tictac | Next player: X | move 2 of 5"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct StatusBar {
    pub status: String,
    pub step: usize,
    /// Index of the latest history entry.
    pub last_step: usize,
    pub game_over: bool,
}

impl StatusBar {
    pub fn new(status: String, step: usize, last_step: usize, game_over: bool) -> Self {
        Self {
            status,
            step,
            last_step,
            game_over,
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status_style = if self.game_over {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![
            Span::styled("tictac", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled(self.status.clone(), status_style),
        ];
        if self.step < self.last_step {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("move {} of {}", self.step, self.last_step),
                Style::default().fg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_latest_move() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("Next player: X".to_string(), 3, 3, false);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("tictac | Next player: X"));
        assert!(!text.contains("move"));
    }

    #[test]
    fn test_status_bar_viewing_history() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("Next player: O".to_string(), 2, 5, false);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        assert!(buffer_text(&terminal).contains("move 2 of 5"));
    }

    #[test]
    fn test_status_bar_game_over() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = StatusBar::new("O won!".to_string(), 5, 5, true);

        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        assert!(buffer_text(&terminal).contains("O won!"));
    }
}
