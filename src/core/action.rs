//! Action representation: a (row, col) coordinate.
//!
//! An action names the cell a move is played in. Whose mark goes there is
//! not part of the action; it follows from the board the action is applied
//! to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{BOARD_SIZE, CELL_COUNT};
use super::player::Player;

/// A move: the cell at `(row, col)`.
///
/// ## Example
///
/// ```
/// use tictactoe::core::Action;
///
/// let center = Action::new(1, 1);
/// assert_eq!(center.index(), 4);
/// assert_eq!(Action::from_index(4), Some(center));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

/// Legal actions for a board. Never more than nine, so kept inline.
pub type Actions = SmallVec<[Action; CELL_COUNT]>;

impl Action {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Build from a row-major cell index (0-8).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
        } else {
            None
        }
    }

    /// Row-major cell index. Meaningless for off-board actions.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Whether both coordinates lie on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == BOARD_SIZE - 1) && (self.col == 0 || self.col == BOARD_SIZE - 1)
    }

    #[must_use]
    pub const fn is_center(self) -> bool {
        self.row == BOARD_SIZE / 2 && self.col == BOARD_SIZE / 2
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Action> for (usize, usize) {
    fn from(action: Action) -> Self {
        (action.row, action.col)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for:
/// - Game records produced by the match runner
/// - Replay and validation of finished games
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Ply number, starting at 0 for X's first move.
    pub ply: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: Player, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
