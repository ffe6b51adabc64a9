//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the game's
//! [`View`](crate::core::view::View), and translates keyboard and mouse
//! events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Another adapter (web, GUI) could drive the same `core::update`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop blocks on input (up to 500ms at a time)
//! and only redraws after an event arrives or the terminal is resized.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::Game;
use crate::tui::component::EventHandler;
use crate::tui::components::{GridEvent, GridState, MoveListEvent, MoveListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which component receives keyboard navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Moves,
}

/// TUI-specific presentation state (not part of core game logic)
pub struct TuiState {
    pub grid: GridState,
    pub move_list: MoveListState,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            grid: GridState::new(),
            move_list: MoveListState::new(),
            focus: Focus::Grid, // Players expect to start playing immediately
        }
    }

    /// Translate a terminal event into at most one core action.
    ///
    /// Clicks go to whichever component they land on; keys go to the
    /// focused component.
    pub fn route_event(&mut self, event: &TuiEvent) -> Option<Action> {
        match event {
            TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
            TuiEvent::Resize => None,
            TuiEvent::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Grid => Focus::Moves,
                    Focus::Moves => Focus::Grid,
                };
                None
            }
            TuiEvent::MouseClick(..) => {
                if let Some(GridEvent::Activated(index)) = self.grid.handle_event(event) {
                    self.focus = Focus::Grid;
                    return Some(Action::CellActivated(index));
                }
                if let Some(MoveListEvent::Jump(step)) = self.move_list.handle_event(event) {
                    self.focus = Focus::Moves;
                    return Some(Action::HistoryStepActivated(step));
                }
                None
            }
            _ => match self.focus {
                Focus::Grid => self
                    .grid
                    .handle_event(event)
                    .map(|GridEvent::Activated(index)| Action::CellActivated(index)),
                Focus::Moves => self
                    .move_list
                    .handle_event(event)
                    .map(|MoveListEvent::Jump(step)| Action::HistoryStepActivated(step)),
            },
        }
    }

    /// Keep the move list selection on the game's current step.
    pub fn sync(&mut self, game: &Game) {
        self.move_list.follow(game.step(), game.history().len());
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut game = Game::from_config(&config);
    let mut tui = TuiState::new();
    info!(
        "New game: {} moves first, {:?} win scan",
        game.first_mark(),
        game.win_scan()
    );

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut game, &mut tui)
    });
    ratatui::restore();

    info!("Exiting at step {} ({})", game.step(), game.status_text());
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    game: &mut Game,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, game, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if let Some(action) = tui.route_event(&event) {
                debug!("Event {:?} → {:?}", event, action);
                if update(game, action) == Effect::Quit {
                    return Ok(());
                }
                tui.sync(game);
            }
            pending = poll_event_immediate()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::played;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Draw once so components cache their on-screen areas.
    fn rendered(game: &Game, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, game, tui)).unwrap();
    }

    #[test]
    fn test_keys_route_to_focused_component() {
        let mut tui = TuiState::new();
        assert_eq!(
            tui.route_event(&TuiEvent::InputChar('5')),
            Some(Action::CellActivated(4))
        );

        assert_eq!(tui.route_event(&TuiEvent::ToggleFocus), None);
        assert_eq!(tui.focus, Focus::Moves);
        tui.move_list.follow(0, 2);
        tui.route_event(&TuiEvent::CursorDown);
        assert_eq!(
            tui.route_event(&TuiEvent::Submit),
            Some(Action::HistoryStepActivated(1))
        );
    }

    #[test]
    fn test_quit_events() {
        let mut tui = TuiState::new();
        assert_eq!(tui.route_event(&TuiEvent::Quit), Some(Action::Quit));
        assert_eq!(tui.route_event(&TuiEvent::ForceQuit), Some(Action::Quit));
        assert_eq!(tui.route_event(&TuiEvent::Resize), None);
    }

    #[test]
    fn test_click_on_cell_plays_it() {
        let mut game = Game::default();
        let mut tui = TuiState::new();
        rendered(&game, &mut tui);

        let area = tui.grid.cell_areas[2];
        let action = tui
            .route_event(&TuiEvent::MouseClick(area.x + 2, area.y + 1))
            .unwrap();
        assert_eq!(action, Action::CellActivated(2));

        update(&mut game, action);
        tui.sync(&game);
        assert_eq!(game.step(), 1);
        assert_eq!(tui.move_list.selected, 1);
    }

    #[test]
    fn test_click_on_move_jumps_and_focuses_list() {
        let mut game = played(&[0, 4, 1]);
        let mut tui = TuiState::new();
        tui.sync(&game);
        rendered(&game, &mut tui);

        let list = tui.move_list.area;
        let action = tui
            .route_event(&TuiEvent::MouseClick(list.x + 3, list.y + 1))
            .unwrap();
        assert_eq!(action, Action::HistoryStepActivated(1));
        assert_eq!(tui.focus, Focus::Moves);

        update(&mut game, action);
        assert_eq!(game.step(), 1);
        assert_eq!(game.history().len(), 4);
    }
}
