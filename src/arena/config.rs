//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::search::PolicyKind;

/// Configuration for a series of games between two policies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Policy playing X (moves first).
    pub x: PolicyKind,

    /// Policy playing O.
    pub o: PolicyKind,

    /// Number of games to play.
    pub games: u32,

    /// Random seed. Each game forks its own stream from it.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            x: PolicyKind::Minimax,
            o: PolicyKind::Minimax,
            games: 1,
            seed: 42,
        }
    }
}

impl MatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for X.
    pub fn with_x(mut self, policy: PolicyKind) -> Self {
        self.x = policy;
        self
    }

    /// Set the policy for O.
    pub fn with_o(mut self, policy: PolicyKind) -> Self {
        self.o = policy;
        self
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
