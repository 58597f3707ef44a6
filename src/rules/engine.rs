//! Tic-Tac-Toe rules as pure functions over `Board` values.
//!
//! - What actions are legal
//! - How actions produce a new board
//! - Win/draw conditions and utility

use crate::core::{Action, Actions, Board, Cell, Error, MoveRejection, Player, Result, BOARD_SIZE};

/// The eight winning lines, in scan order: rows 0-2, columns 0-2, main
/// diagonal, anti-diagonal.
pub const WINNING_LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Board filled with no line completed.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Utility from X's perspective: 1, -1 or 0.
    #[must_use]
    pub fn utility(&self) -> i32 {
        match self {
            GameResult::Winner(p) => p.sign(),
            GameResult::Draw => 0,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// The empty starting board.
#[must_use]
pub fn initial_state() -> Board {
    Board::empty()
}

/// The player to move.
///
/// X moves when the piece counts are equal, O otherwise. Boards that could
/// not arise from alternating play are not rejected.
#[must_use]
pub fn player(board: &Board) -> Player {
    let (x, o) = board.piece_counts();
    if x == o {
        Player::X
    } else {
        Player::O
    }
}

/// All empty cells, in row-major order.
#[must_use]
pub fn actions(board: &Board) -> Actions {
    board
        .iter()
        .filter(|(_, _, cell)| cell.is_empty())
        .map(|(row, col, _)| Action::new(row, col))
        .collect()
}

/// The board produced by the player to move marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns `Error::InvalidMove` if the action is off the board or the cell
/// is already occupied.
pub fn result(board: &Board, action: Action) -> Result<Board> {
    match board.get(action.row, action.col) {
        None => Err(Error::InvalidMove {
            action,
            reason: MoveRejection::OutOfBounds,
        }),
        Some(Cell::Empty) => Ok(board.with_cell(action.row, action.col, player(board).to_cell())),
        Some(_) => Err(Error::InvalidMove {
            action,
            reason: MoveRejection::Occupied,
        }),
    }
}

/// The line-completing player, if any.
///
/// Lines are scanned in `WINNING_LINES` order and the first complete one
/// decides, so a malformed board with two winners still gives a stable
/// answer.
#[must_use]
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|line| winning_line_owner(board, line))
}

/// The first complete line and its owner.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Player, [(usize, usize); BOARD_SIZE])> {
    WINNING_LINES
        .iter()
        .find_map(|line| winning_line_owner(board, line).map(|p| (p, *line)))
}

fn winning_line_owner(board: &Board, line: &[(usize, usize); BOARD_SIZE]) -> Option<Player> {
    let rows = board.rows();
    let [(r0, c0), (r1, c1), (r2, c2)] = *line;
    let first = rows[r0][c0];
    if first == rows[r1][c1] && first == rows[r2][c2] {
        first.player()
    } else {
        None
    }
}

/// Whether the game is over: someone has won or no empty cell remains.
#[must_use]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// 1 if X has won, -1 if O has won, 0 otherwise.
///
/// Only meaningful on terminal boards.
#[must_use]
pub fn utility(board: &Board) -> i32 {
    winner(board).map_or(0, Player::sign)
}

/// The game result, or `None` while the game continues.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    match winner(board) {
        Some(p) => Some(GameResult::Winner(p)),
        None if board.is_full() => Some(GameResult::Draw),
        None => None,
    }
}
