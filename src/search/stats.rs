//! Minimax search statistics for diagnostics and benchmarking.

use serde::{Deserialize, Serialize};

/// Statistics collected during one minimax search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards evaluated, including the root.
    pub nodes_visited: u64,

    /// Terminal boards reached (leaves of the game tree).
    pub terminal_nodes: u64,

    /// Deepest ply reached below the root.
    pub max_depth: u8,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn visit(&mut self, depth: u8) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Calculate nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
