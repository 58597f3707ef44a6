//! Engine function bindings for Python.
//!
//! Boards cross the boundary as `list[list[str | None]]` with `"X"`, `"O"`
//! and `None`; actions as `(row, col)` tuples.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, Board, Cell, BOARD_SIZE};
use crate::{rules, search};

/// A board as seen from Python.
pub type PyBoard = Vec<Vec<Option<String>>>;

fn to_board(rows: &PyBoard) -> PyResult<Board> {
    if rows.len() != BOARD_SIZE || rows.iter().any(|r| r.len() != BOARD_SIZE) {
        return Err(PyValueError::new_err("board must be 3 rows of 3 cells"));
    }

    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            cells[r][c] = match value.as_deref() {
                None => Cell::Empty,
                Some("X") => Cell::X,
                Some("O") => Cell::O,
                Some(other) => {
                    return Err(PyValueError::new_err(format!(
                        "invalid cell {other:?} at ({r}, {c})"
                    )))
                }
            };
        }
    }
    Ok(Board::from_rows(cells))
}

fn from_board(board: &Board) -> PyBoard {
    board
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.player().map(|p| p.to_string()))
                .collect()
        })
        .collect()
}

/// Returns the starting state of the board.
#[pyfunction]
#[pyo3(name = "initial_state")]
pub fn py_initial_state() -> PyBoard {
    from_board(&rules::initial_state())
}

/// Returns the player who has the next turn.
#[pyfunction]
#[pyo3(name = "player")]
pub fn py_player(board: PyBoard) -> PyResult<String> {
    Ok(rules::player(&to_board(&board)?).to_string())
}

/// Returns all legal actions as (row, col) tuples, row-major.
#[pyfunction]
#[pyo3(name = "actions")]
pub fn py_actions(board: PyBoard) -> PyResult<Vec<(usize, usize)>> {
    Ok(rules::actions(&to_board(&board)?)
        .into_iter()
        .map(Into::into)
        .collect())
}

/// Returns the board after playing `action`. Raises ValueError on an
/// illegal move.
#[pyfunction]
#[pyo3(name = "result")]
pub fn py_result(board: PyBoard, action: (usize, usize)) -> PyResult<PyBoard> {
    let next = rules::result(&to_board(&board)?, Action::from(action))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(from_board(&next))
}

/// Returns the winner, if there is one.
#[pyfunction]
#[pyo3(name = "winner")]
pub fn py_winner(board: PyBoard) -> PyResult<Option<String>> {
    Ok(rules::winner(&to_board(&board)?).map(|p| p.to_string()))
}

/// Returns True if the game is over.
#[pyfunction]
#[pyo3(name = "terminal")]
pub fn py_terminal(board: PyBoard) -> PyResult<bool> {
    Ok(rules::terminal(&to_board(&board)?))
}

/// Returns 1 if X has won, -1 if O has won, 0 otherwise.
#[pyfunction]
#[pyo3(name = "utility")]
pub fn py_utility(board: PyBoard) -> PyResult<i32> {
    Ok(rules::utility(&to_board(&board)?))
}

/// Returns the optimal action for the current player, or None.
#[pyfunction]
#[pyo3(name = "minimax")]
pub fn py_minimax(board: PyBoard) -> PyResult<Option<(usize, usize)>> {
    Ok(search::minimax(&to_board(&board)?).map(Into::into))
}
