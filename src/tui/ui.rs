use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::core::state::Game;
use crate::tui::component::Component;
use crate::tui::components::{Grid, MoveList, StatusBar};
use crate::tui::{Focus, TuiState};

const HELP_TEXT: &str = " ←↑↓→ move  Enter play  1-9 cell  Tab board/moves  q quit ";

pub fn draw_ui(frame: &mut Frame, game: &Game, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let view = game.view();

    let [status_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());

    let (grid_width, _) = Grid::required_size();
    let [board_area, moves_area] =
        Layout::horizontal([Length(grid_width + 4), Min(0)]).areas(main_area);

    StatusBar::new(
        view.status.clone(),
        game.step(),
        game.history().len() - 1,
        game.winner().is_some(),
    )
    .render(frame, status_area);

    Grid::new(&mut tui.grid, &view.board, tui.focus == Focus::Grid).render(frame, board_area);

    MoveList::new(&mut tui.move_list, &view.moves, tui.focus == Focus::Moves)
        .render(frame, moves_area);

    frame.render_widget(
        Line::from(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
