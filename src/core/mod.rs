//! Core engine types: players, cells, boards, actions, errors, RNG.
//!
//! Everything here is a plain value type. Boards are `Copy`, so rules and
//! search code pass them around freely without sharing mutable state.

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord, Actions};
pub use board::{Board, Cell, BOARD_SIZE, CELL_COUNT};
pub use error::{Error, MoveRejection, Result};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
