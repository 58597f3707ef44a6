//! Optimal-move search.
//!
//! ## Overview
//!
//! Full-depth minimax over the Tic-Tac-Toe game tree. X maximizes the
//! utility, O minimizes it, ties go to the first action in row-major order.
//!
//! ## Usage
//!
//! ```rust
//! use tictactoe::rules::{initial_state, result};
//! use tictactoe::search::{minimax, MinimaxSearch};
//!
//! let board = initial_state();
//! let action = minimax(&board).unwrap();
//! let board = result(&board, action).unwrap();
//!
//! // Same search, with statistics
//! let mut search = MinimaxSearch::new();
//! let reply = search.search(&board);
//! assert!(reply.is_some());
//! println!("{} nodes", search.stats().nodes_visited);
//! ```

pub mod minimax;
pub mod policy;
pub mod stats;

pub use minimax::{max_value, min_value, minimax, MinimaxSearch};
pub use policy::{MinimaxPolicy, MovePolicy, PolicyKind, RandomPolicy};
pub use stats::SearchStats;
