//! Matches between move policies.
//!
//! Runs complete games between two `MovePolicy` implementations and keeps
//! a `GameRecord` of each:
//! - `play_game`: one game from the empty board
//! - `run_match`: a configured series of games with a result tally
//! - `GameRecord`: move list plus result, replayable and bincode-encodable

pub mod config;
pub mod record;
pub mod runner;

pub use config::MatchConfig;
pub use record::GameRecord;
pub use runner::{play_game, run_match, MatchSummary};
