//! The 3×3 board.
//!
//! A `Board` is a plain `Copy` value: applying a move always yields a new
//! board, so a search can hold on to every ancestor without aliasing.
//!
//! ## Text format
//!
//! Boards print as three lines of `X`, `O` and `.`:
//!
//! ```
//! use tictactoe::core::{Board, Cell};
//!
//! let board: Board = "XO.\n.X.\n..O".parse().unwrap();
//! assert_eq!(board.get(1, 1), Some(Cell::X));
//! assert_eq!(board.to_string(), "XO.\n.X.\n..O");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::Error;
use super::player::Player;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player occupying this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Parse a cell from its text symbol.
    ///
    /// `.`, `_`, `-` and space all denote an empty cell.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}

/// A 3×3 grid of cells, stored row-major.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// The underlying rows.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Get a cell, or `None` if the coordinates are off the board.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Return a copy of this board with one cell replaced.
    ///
    /// Coordinates must be on the board; the rules layer checks them first.
    #[must_use]
    pub(crate) fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (row, col, cell))
        })
    }

    /// Count of X and O pieces on the board.
    #[must_use]
    pub fn piece_counts(&self) -> (usize, usize) {
        self.iter().fold((0, 0), |(x, o), (_, _, cell)| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|(_, _, cell)| cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Number of cells that differ between two boards.
    #[must_use]
    pub fn diff_count(&self, other: &Board) -> usize {
        self.iter()
            .zip(other.iter())
            .filter(|((_, _, a), (_, _, b))| a != b)
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse nine cell symbols in row-major order.
    ///
    /// Newlines, `|` and `/` are treated as row separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        let mut count = 0usize;

        for c in s.chars().filter(|c| !matches!(c, '\n' | '\r' | '|' | '/')) {
            let cell = Cell::from_char(c).ok_or_else(|| Error::InvalidBoard {
                reason: format!("invalid cell character '{c}' at position {count}"),
            })?;
            if count >= CELL_COUNT {
                return Err(Error::InvalidBoard {
                    reason: format!("expected {CELL_COUNT} cells, got more"),
                });
            }
            cells[count / BOARD_SIZE][count % BOARD_SIZE] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(Error::InvalidBoard {
                reason: format!("expected {CELL_COUNT} cells, got {count}"),
            });
        }

        Ok(Self { cells })
    }
}
