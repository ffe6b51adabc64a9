use tictac::WinScan;
use tictac::core::action::{Action, Effect, update};
use tictac::core::board::{Board, CELLS, LINES, Mark, Outcome, evaluate_winner};
use tictac::core::state::Game;

// ============================================================================
// Helper Functions
// ============================================================================

/// Plays `moves` through the reducer, the way an adapter would.
fn play(game: &mut Game, moves: &[usize]) {
    for &index in moves {
        assert_eq!(update(game, Action::CellActivated(index)), Effect::None);
    }
}

/// Visits every position reachable through legal play, depth first.
fn for_each_game(game: &Game, visit: &mut impl FnMut(&Game)) {
    visit(game);
    if game.winner().is_some() {
        return;
    }
    for index in 0..CELLS {
        if game.board().get(index).is_none() {
            let mut next = game.clone();
            next.apply_move(index).unwrap();
            for_each_game(&next, visit);
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_top_row_win_then_branch() {
    let mut game = Game::new(Mark::X, WinScan::Scoped);
    play(&mut game, &[0, 4, 1, 5, 2]);

    assert_eq!(game.winner(), Some(Outcome::Won(Mark::X)));
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.step(), 5);
    assert_eq!(game.status_text(), "X won!");

    update(&mut game, Action::HistoryStepActivated(2));
    update(&mut game, Action::CellActivated(7));

    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    assert_eq!(game.winner(), None);
    assert_eq!(game.next_mark(), Mark::O);
    assert_eq!(game.status_text(), "Next player: O");
}

#[test]
fn test_nine_moves_without_line_is_tie() {
    let mut game = Game::default();
    // O X O
    // O X X
    // X O O
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.winner(), Some(Outcome::Tie));
    assert_eq!(game.status_text(), "Tie");
    assert!(game.board().is_full());
}

#[test]
fn test_no_moves_accepted_after_result() {
    let mut game = Game::default();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.clone();

    for index in 0..CELLS {
        update(&mut game, Action::CellActivated(index));
    }
    assert_eq!(game, before);
}

#[test]
fn test_jump_keeps_history_until_next_move() {
    let mut game = Game::default();
    play(&mut game, &[4, 0, 8]);

    update(&mut game, Action::HistoryStepActivated(0));
    assert_eq!(game.history().len(), 4);
    assert!(game.board().is_empty());
    assert_eq!(game.next_mark(), Mark::O);

    update(&mut game, Action::HistoryStepActivated(3));
    assert_eq!(game.board().get(8), Some(Mark::O));
    assert_eq!(game.next_mark(), Mark::X);
}

#[test]
fn test_move_list_tracks_branch() {
    let mut game = Game::default();
    play(&mut game, &[4, 0, 8]);
    update(&mut game, Action::HistoryStepActivated(1));
    update(&mut game, Action::CellActivated(2));

    let view = game.view();
    let labels: Vec<_> = view.moves.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "Go to move #1 (O at row 2, col 2)",
            "Go to move #2 (X at row 1, col 3)",
        ]
    );
    assert!(view.moves[2].is_current);
    assert_eq!(view.status, "Next player: O");
}

// ============================================================================
// Properties over every reachable position
// ============================================================================

#[test]
fn test_history_invariants_hold_everywhere() {
    let mut count = 0usize;
    for_each_game(&Game::default(), &mut |game| {
        count += 1;
        let history = game.history();
        assert!(history[0].board.is_empty());
        assert_eq!(history[0].played, None);
        assert!(game.step() < history.len());

        for pair in history.windows(2) {
            let (prev, next) = (&pair[0].board, &pair[1].board);
            let played = pair[1].played.unwrap();
            let changed: Vec<_> = (0..CELLS).filter(|&i| prev.get(i) != next.get(i)).collect();
            assert_eq!(changed, vec![played]);
            assert_eq!(prev.get(played), None);
        }

        let expected = if game.step() % 2 == 0 { Mark::O } else { Mark::X };
        assert_eq!(game.next_mark(), expected);
    });
    // Every node of the game tree, one per move order
    assert_eq!(count, 549_946);
}

#[test]
fn test_scoped_and_full_scans_agree_on_reachable_positions() {
    for_each_game(&Game::new(Mark::X, WinScan::Scoped), &mut |game| {
        let entry = game.current();
        assert_eq!(
            evaluate_winner(&entry.board, entry.played, WinScan::Scoped),
            evaluate_winner(&entry.board, entry.played, WinScan::Full),
        );
    });
}

#[test]
fn test_winner_matches_completed_lines() {
    for_each_game(&Game::default(), &mut |game| {
        let board: &Board = game.board();
        let owner = LINES.iter().find_map(|line| {
            let mark = board.get(line[0])?;
            line.iter().all(|&i| board.get(i) == Some(mark)).then_some(mark)
        });
        let expected = match owner {
            Some(mark) => Some(Outcome::Won(mark)),
            None if board.is_full() => Some(Outcome::Tie),
            None => None,
        };
        assert_eq!(game.winner(), expected);
    });
}

#[test]
fn test_jump_then_replay_reproduces_state() {
    let mut game = Game::default();
    play(&mut game, &[4, 0, 8, 2, 1]);
    let moves: Vec<usize> = game.history().iter().filter_map(|e| e.played).collect();

    for step in 0..game.history().len() {
        let mut branched = game.clone();
        update(&mut branched, Action::HistoryStepActivated(step));

        let mut replayed = Game::default();
        play(&mut replayed, &moves[..step]);

        assert_eq!(branched.board(), replayed.board());
        assert_eq!(branched.next_mark(), replayed.next_mark());
        assert_eq!(branched.winner(), replayed.winner());
    }
}
