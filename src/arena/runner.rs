//! Game loop: policies alternate until the board is terminal.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GameRng, Player, Result};
use crate::rules::{self, GameResult};
use crate::search::MovePolicy;

use super::config::MatchConfig;
use super::record::GameRecord;

/// Aggregate result of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
    /// Games that ended without a result (a policy returned no action).
    pub unfinished: u32,
}

impl MatchSummary {
    /// Count one game.
    pub fn record(&mut self, result: Option<GameResult>) {
        match result {
            Some(GameResult::Winner(Player::X)) => self.x_wins += 1,
            Some(GameResult::Winner(Player::O)) => self.o_wins += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws + self.unfinished
    }
}

/// Play one game from the empty board.
///
/// Stops when the board is terminal or a policy declines to move.
///
/// # Errors
///
/// Returns `Error::InvalidMove` if a policy proposes an illegal action.
pub fn play_game(x: &mut dyn MovePolicy, o: &mut dyn MovePolicy, seed: u64) -> Result<GameRecord> {
    let mut record = GameRecord::new(seed);
    let mut board = rules::initial_state();

    while !rules::terminal(&board) {
        let mover = rules::player(&board);
        let choice = match mover {
            Player::X => x.choose(&board),
            Player::O => o.choose(&board),
        };
        let Some(action) = choice else {
            log::debug!("{} declined to move at ply {}", mover, record.len());
            break;
        };
        board = rules::result(&board, action)?;
        record.push(ActionRecord::new(mover, action, record.len() as u32));
    }

    record.result = rules::outcome(&board);
    Ok(record)
}

/// Play `config.games` games and tally the results.
///
/// Each game gets its own RNG fork, so game `n` is reproducible from the
/// match seed alone.
///
/// # Errors
///
/// Propagates errors from [`play_game`].
pub fn run_match(config: &MatchConfig) -> Result<(MatchSummary, Vec<GameRecord>)> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = MatchSummary::default();
    let mut records = Vec::with_capacity(config.games as usize);

    for _ in 0..config.games {
        let mut game_rng = rng.fork();
        let seed = game_rng.seed();
        let mut x = config.x.build(game_rng.fork());
        let mut o = config.o.build(game_rng.fork());

        let record = play_game(x.as_mut(), o.as_mut(), seed)?;
        summary.record(record.result);
        records.push(record);
    }

    log::debug!(
        "match {} vs {}: X {} / O {} / draw {} / unfinished {}",
        config.x.name(),
        config.o.name(),
        summary.x_wins,
        summary.o_wins,
        summary.draws,
        summary.unfinished
    );
    Ok((summary, records))
}
