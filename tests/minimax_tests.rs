//! Minimax integration tests.

use tictactoe::core::Board;
use tictactoe::rules::{actions, initial_state, result, terminal, utility, winner};
use tictactoe::search::{max_value, min_value, minimax, MinimaxSearch};
use tictactoe::{Action, Player};

fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

// =============================================================================
// Known Positions
// =============================================================================

#[test]
fn test_opening_move_is_top_left_corner() {
    assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
}

#[test]
fn test_opening_move_is_corner_or_center() {
    let action = minimax(&initial_state()).unwrap();
    assert!(action.is_corner() || action.is_center());
}

#[test]
fn test_x_completes_row() {
    assert_eq!(minimax(&board("XX.\nOO.\n...")), Some(Action::new(0, 2)));
}

#[test]
fn test_o_answers_corner_with_center() {
    assert_eq!(minimax(&board("X........")), Some(Action::new(1, 1)));
}

#[test]
fn test_o_prefers_win_over_block() {
    // X threatens (0, 2); O wins outright at (1, 2) and must take it.
    assert_eq!(minimax(&board("XX.\nOO.\nX..")), Some(Action::new(1, 2)));
}

#[test]
fn test_every_first_move_is_a_draw() {
    let mut search = MinimaxSearch::new();
    let values = search.action_values(&initial_state());

    assert_eq!(values.len(), 9);
    assert!(values.iter().all(|(_, v)| *v == 0));
}

#[test]
fn test_value_functions_agree_with_utility_on_terminal() {
    for text in ["XXX\nOO.\n...", "XX.\nOOO\nX.X", "XOX\nXXO\nOXO"] {
        let b = board(text);
        assert_eq!(max_value(&b), utility(&b));
        assert_eq!(min_value(&b), utility(&b));
    }
}

// =============================================================================
// Contract
// =============================================================================

#[test]
fn test_none_on_terminal_boards() {
    assert_eq!(minimax(&board("XXX\nOO.\n...")), None);
    assert_eq!(minimax(&board("XOX\nXXO\nOXO")), None);
}

#[test]
fn test_minimax_is_idempotent() {
    let b = board("X.O\n.X.\n...");
    let first = minimax(&b);
    for _ in 0..3 {
        assert_eq!(minimax(&b), first);
    }
}

#[test]
fn test_minimax_action_is_legal() {
    let b = board("XO.\n.X.\nO..");
    let action = minimax(&b).unwrap();
    assert!(actions(&b).contains(&action));
}

#[test]
fn test_perfect_play_is_a_draw() {
    let mut b = initial_state();
    let mut plies = 0;
    while let Some(action) = minimax(&b) {
        b = result(&b, action).unwrap();
        plies += 1;
    }

    assert!(terminal(&b));
    assert_eq!(plies, 9);
    assert_eq!(winner(&b), None);
    assert_eq!(utility(&b), 0);
}

#[test]
fn test_minimax_converts_forced_win() {
    // Corner opening answered on an adjacent edge loses for O.
    let mut b = board("XO.\n...\n...");
    assert_eq!(max_value(&b), 1);

    while !terminal(&b) {
        let action = minimax(&b).unwrap();
        b = result(&b, action).unwrap();
    }
    assert_eq!(winner(&b), Some(Player::X));
}

#[test]
fn test_stats_for_reply_to_corner_opening() {
    let mut search = MinimaxSearch::new();
    let action = search.search(&board("X........"));

    assert_eq!(action, Some(Action::new(1, 1)));
    let stats = search.stats();
    assert!(stats.nodes_visited > 1);
    assert!(stats.terminal_nodes > 0);
    assert_eq!(stats.max_depth, 8);
}
