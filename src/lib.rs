//! # tictactoe
//!
//! Tic-Tac-Toe rules and optimal play.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `Board` is `Copy`. Applying a move returns a new
//!    board and never touches the old one, so callers can keep history
//!    and the search never aliases an ancestor position.
//!
//! 2. **Pure Functions**: The rules are free functions from a board (and
//!    maybe an action) to a value. No hidden state, safe to call from many
//!    threads at once.
//!
//! 3. **Deterministic Search**: Minimax is exhaustive and breaks ties by
//!    row-major order, so the same board always yields the same action.
//!
//! ## Quick Start
//!
//! ```
//! use tictactoe::{actions, initial_state, minimax, player, result, terminal, utility, Player};
//!
//! let mut board = initial_state();
//! assert_eq!(player(&board), Player::X);
//! assert_eq!(actions(&board).len(), 9);
//!
//! while !terminal(&board) {
//!     let action = minimax(&board).unwrap();
//!     board = result(&board, action).unwrap();
//! }
//!
//! // Perfect play is a draw.
//! assert_eq!(utility(&board), 0);
//! ```
//!
//! ## Modules
//!
//! - `core`: Players, cells, boards, actions, errors, RNG
//! - `rules`: Turn order, legal actions, move application, win detection
//! - `search`: Minimax search, statistics, move policies
//! - `arena`: Games and matches between policies

pub mod arena;
pub mod core;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Actions, Board, Cell, Error, GameRng, MoveRejection, Player, Result,
};

pub use crate::rules::{
    actions, initial_state, outcome, player, result, terminal, utility, winner, GameResult,
};

pub use crate::search::{
    max_value, min_value, minimax, MinimaxPolicy, MinimaxSearch, MovePolicy, PolicyKind,
    RandomPolicy, SearchStats,
};

pub use crate::arena::{play_game, run_match, GameRecord, MatchConfig, MatchSummary};
