//! Move policies used by the match runner.
//!
//! A `MovePolicy` picks an action for whichever player is to move:
//! - `MinimaxPolicy`: always plays the minimax action
//! - `RandomPolicy`: uniform over legal actions, seeded for reproducibility

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, GameRng};
use crate::rules::actions;

use super::minimax::MinimaxSearch;

/// Policy for choosing the next action on a board.
pub trait MovePolicy: Send {
    /// Short name for logs and summaries.
    fn name(&self) -> &'static str;

    /// Choose an action for the player to move.
    ///
    /// Returns `None` if there is nothing to play.
    fn choose(&mut self, board: &Board) -> Option<Action>;
}

/// Optimal play via exhaustive minimax.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    search: MinimaxSearch,
}

impl MinimaxPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The search context, including statistics of the last move.
    pub fn search(&self) -> &MinimaxSearch {
        &self.search
    }
}

impl MovePolicy for MinimaxPolicy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose(&mut self, board: &Board) -> Option<Action> {
        self.search.search(board)
    }
}

/// Uniformly random legal moves.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, board: &Board) -> Option<Action> {
        if crate::rules::terminal(board) {
            return None;
        }
        let legal = actions(board);
        self.rng.choose(&legal).copied()
    }
}

/// Serializable selector for a built-in policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Minimax,
    Random,
}

impl PolicyKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PolicyKind::Minimax => "minimax",
            PolicyKind::Random => "random",
        }
    }

    /// Instantiate the policy. `rng` seeds random policies.
    pub fn build(self, rng: GameRng) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Minimax => Box::new(MinimaxPolicy::new()),
            PolicyKind::Random => Box::new(RandomPolicy::from_rng(rng)),
        }
    }
}
