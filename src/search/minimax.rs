//! Exhaustive minimax search.
//!
//! X maximizes utility, O minimizes it. Every line is searched to a terminal
//! board: no pruning and no caching, which is cheap enough on a 3×3 board
//! (549,946 nodes from the empty position).
//!
//! Among equally good actions the first in `actions` order is chosen, so
//! results are fully reproducible.

use std::time::Instant;

use crate::core::{Action, Board, Player};
use crate::rules::{actions, player, result, terminal, utility};

use super::stats::SearchStats;

/// The optimal action for the player to move, or `None` on a terminal board.
///
/// ```
/// use tictactoe::{initial_state, minimax, Action};
///
/// assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
/// ```
#[must_use]
pub fn minimax(board: &Board) -> Option<Action> {
    MinimaxSearch::new().search(board)
}

/// Value of `board` when X is to choose: the best utility X can force.
#[must_use]
pub fn max_value(board: &Board) -> i32 {
    max_value_counted(board, &mut SearchStats::new(), 0)
}

/// Value of `board` when O is to choose: the best utility O can force.
#[must_use]
pub fn min_value(board: &Board) -> i32 {
    min_value_counted(board, &mut SearchStats::new(), 0)
}

/// Legal successor boards, in `actions` order.
fn children(board: &Board) -> impl Iterator<Item = Board> + '_ {
    actions(board)
        .into_iter()
        .filter_map(move |action| result(board, action).ok())
}

fn max_value_counted(board: &Board, stats: &mut SearchStats, depth: u8) -> i32 {
    stats.visit(depth);
    if terminal(board) {
        stats.terminal_nodes += 1;
        return utility(board);
    }

    let mut value = i32::MIN;
    for child in children(board) {
        value = value.max(min_value_counted(&child, stats, depth + 1));
    }
    value
}

fn min_value_counted(board: &Board, stats: &mut SearchStats, depth: u8) -> i32 {
    stats.visit(depth);
    if terminal(board) {
        stats.terminal_nodes += 1;
        return utility(board);
    }

    let mut value = i32::MAX;
    for child in children(board) {
        value = value.min(max_value_counted(&child, stats, depth + 1));
    }
    value
}

/// Minimax search context that records statistics.
///
/// Holds no game state between calls: searching the same board twice gives
/// the same action.
#[derive(Clone, Debug, Default)]
pub struct MinimaxSearch {
    stats: SearchStats,
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Find the optimal action for the player to move.
    ///
    /// Returns `None` if the board is terminal.
    pub fn search(&mut self, board: &Board) -> Option<Action> {
        let mover = player(board);
        let values = self.action_values(board);

        let mut best: Option<(Action, i32)> = None;
        for (action, value) in values {
            let improves = match best {
                None => true,
                Some((_, best_value)) => match mover {
                    Player::X => value > best_value,
                    Player::O => value < best_value,
                },
            };
            if improves {
                best = Some((action, value));
            }
        }

        if let Some((action, value)) = best {
            log::debug!(
                "minimax: {} plays {} (value {}, {} nodes in {}us)",
                mover,
                action,
                value,
                self.stats.nodes_visited,
                self.stats.time_us
            );
        }
        best.map(|(action, _)| action)
    }

    /// The minimax value of every legal action, in `actions` order.
    ///
    /// Empty on a terminal board.
    pub fn action_values(&mut self, board: &Board) -> Vec<(Action, i32)> {
        let start = Instant::now();
        self.stats.reset();
        self.stats.visit(0);

        if terminal(board) {
            self.stats.terminal_nodes += 1;
            self.stats.time_us = start.elapsed().as_micros() as u64;
            return Vec::new();
        }

        let mover = player(board);
        let mut values = Vec::new();
        for action in actions(board) {
            let Ok(child) = result(board, action) else {
                continue;
            };
            let value = match mover {
                Player::X => min_value_counted(&child, &mut self.stats, 1),
                Player::O => max_value_counted(&child, &mut self.stats, 1),
            };
            log::trace!("minimax: {} at {} -> {}", mover, action, value);
            values.push((action, value));
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::initial_state;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_picks_first_corner() {
        assert_eq!(minimax(&initial_state()), Some(Action::new(0, 0)));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(max_value(&initial_state()), 0);
    }

    #[test]
    fn test_terminal_returns_none() {
        assert_eq!(minimax(&board("XXX\nOO.\n...")), None);
        assert_eq!(minimax(&board("XOX\nXOO\nOXX")), None);
    }

    #[test]
    fn test_x_takes_immediate_row_win() {
        assert_eq!(minimax(&board("XX.\nOO.\n...")), Some(Action::new(0, 2)));
    }

    #[test]
    fn test_o_takes_immediate_win() {
        // O to move with a win at (1, 2).
        assert_eq!(minimax(&board("XX.\nOO.\nX..")), Some(Action::new(1, 2)));
    }

    #[test]
    fn test_o_blocks() {
        // X threatens the main diagonal; O must take (2, 2).
        let b = board("X..\n.X.\nO..");
        assert_eq!(minimax(&b), Some(Action::new(2, 2)));
    }

    #[test]
    fn test_values_at_terminal() {
        assert_eq!(max_value(&board("XXX\nOO.\n...")), 1);
        assert_eq!(min_value(&board("XX.\nOOO\nX.X")), -1);
        assert_eq!(min_value(&board("XOX\nXOO\nOXX")), 0);
    }

    #[test]
    fn test_action_values_order_and_content() {
        let mut search = MinimaxSearch::new();
        let values = search.action_values(&board("XX.\nOO.\n..."));

        let acts: Vec<_> = values.iter().map(|(a, _)| *a).collect();
        assert_eq!(acts, actions(&board("XX.\nOO.\n...")).to_vec());
        assert_eq!(values[0], (Action::new(0, 2), 1));
    }

    #[test]
    fn test_action_values_empty_on_terminal() {
        let mut search = MinimaxSearch::new();
        assert!(search.action_values(&board("XOX\nXOO\nOXX")).is_empty());
        assert_eq!(search.stats().nodes_visited, 1);
        assert_eq!(search.stats().terminal_nodes, 1);
    }

    #[test]
    fn test_full_tree_statistics() {
        let mut search = MinimaxSearch::new();
        search.search(&initial_state());

        let stats = search.stats();
        assert_eq!(stats.nodes_visited, 549_946);
        assert_eq!(stats.terminal_nodes, 255_168);
        assert_eq!(stats.max_depth, 9);
    }

    #[test]
    fn test_search_is_repeatable() {
        let b = board("X..\n.O.\n...");
        let mut search = MinimaxSearch::new();
        let first = search.search(&b);
        let first_stats = search.stats().nodes_visited;
        let second = search.search(&b);

        assert_eq!(first, second);
        assert_eq!(first_stats, search.stats().nodes_visited);
    }
}
