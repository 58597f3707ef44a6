//! Python bindings for the Tic-Tac-Toe engine.
//!
//! # Quick Start
//!
//! ```python
//! import tictactoe as ttt
//!
//! board = ttt.initial_state()
//! while not ttt.terminal(board):
//!     board = ttt.result(board, ttt.minimax(board))
//!
//! assert ttt.utility(board) == 0
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// tictactoe: rules and minimax search for Tic-Tac-Toe.
#[pymodule]
fn tictactoe(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_initial_state, m)?)?;
    m.add_function(wrap_pyfunction!(py_player, m)?)?;
    m.add_function(wrap_pyfunction!(py_actions, m)?)?;
    m.add_function(wrap_pyfunction!(py_result, m)?)?;
    m.add_function(wrap_pyfunction!(py_winner, m)?)?;
    m.add_function(wrap_pyfunction!(py_terminal, m)?)?;
    m.add_function(wrap_pyfunction!(py_utility, m)?)?;
    m.add_function(wrap_pyfunction!(py_minimax, m)?)?;

    Ok(())
}
