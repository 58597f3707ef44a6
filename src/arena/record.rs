//! Game records produced by the match runner.
//!
//! A record captures the moves of one finished game and its result. Boards
//! are not stored; `boards()` replays the moves through the rules, which
//! also validates the record.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, Board, Error, Result};
use crate::rules::{self, GameResult};

/// A complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every move, in play order.
    pub moves: Vec<ActionRecord>,

    /// Final result, `None` if the game was cut short.
    pub result: Option<GameResult>,

    /// Seed of the RNG stream used for this game.
    pub seed: u64,
}

impl GameRecord {
    pub fn new(seed: u64) -> Self {
        Self {
            moves: Vec::new(),
            result: None,
            seed,
        }
    }

    /// Add a move to the record.
    pub fn push(&mut self, record: ActionRecord) {
        self.moves.push(record);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replay the record, returning the board before the first move and after
    /// every move.
    ///
    /// # Errors
    ///
    /// Returns `Error::ReplayMismatch` if a move is illegal, was attributed
    /// to the wrong player or ply, or if the stored result disagrees with the
    /// final board.
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut board = rules::initial_state();
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        boards.push(board);

        for (ply, record) in self.moves.iter().enumerate() {
            if rules::terminal(&board) {
                return Err(Error::ReplayMismatch {
                    ply,
                    reason: "move recorded after the game ended".to_string(),
                });
            }
            let mover = rules::player(&board);
            if record.player != mover || record.ply as usize != ply {
                return Err(Error::ReplayMismatch {
                    ply,
                    reason: format!(
                        "expected {} at ply {}, found {} at ply {}",
                        mover, ply, record.player, record.ply
                    ),
                });
            }
            board = rules::result(&board, record.action).map_err(|e| Error::ReplayMismatch {
                ply,
                reason: e.to_string(),
            })?;
            boards.push(board);
        }

        if self.result.is_some() && self.result != rules::outcome(&board) {
            return Err(Error::ReplayMismatch {
                ply: self.moves.len(),
                reason: "recorded result does not match final board".to_string(),
            });
        }

        Ok(boards)
    }

    /// The board after the last move.
    ///
    /// # Errors
    ///
    /// Same conditions as [`GameRecord::boards`].
    pub fn final_board(&self) -> Result<Board> {
        let boards = self.boards()?;
        Ok(boards.last().copied().unwrap_or_default())
    }

    /// Compact binary encoding.
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` if serialization fails.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a record produced by [`GameRecord::to_bytes`].
    ///
    /// # Errors
    ///
    /// Returns `Error::Encoding` on malformed input.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
