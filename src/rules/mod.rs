//! Game rules.
//!
//! Pure functions that define:
//! - Whose turn it is and which actions are legal
//! - How an action produces the next board
//! - Win/draw conditions and the utility of a finished game
//!
//! None of them mutate their input; every move yields a fresh `Board`.

pub mod engine;

pub use engine::{
    actions, initial_state, outcome, player, result, terminal, utility, winner, winning_line,
    GameResult, WINNING_LINES,
};
