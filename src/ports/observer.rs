//! Observer port - abstraction for match observation and data collection
//!
//! Observers collect progress, metrics or move logs while a match runs, without the
//! pipeline knowing about any output format.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Board, GameOutcome, Move, Side},
};

/// What an observer learns about a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Index of the game (0-based)
    pub game_num: usize,
    /// Side played by the match's first contender in this game
    pub first_contender_side: Side,
    pub outcome: GameOutcome,
    pub plies: usize,
    /// Whether the game was cut off by the ply limit
    pub truncated: bool,
    pub final_board: Board,
}

impl GameSummary {
    /// Whether the first contender won this game
    pub fn first_contender_won(&self) -> bool {
        self.outcome.winner() == Some(self.first_contender_side)
    }

    /// Whether the second contender won this game
    pub fn second_contender_won(&self) -> bool {
        self.outcome.winner() == Some(self.first_contender_side.opponent())
    }
}

/// Observer trait for monitoring matches
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(...)` - for each ply
///    - `on_game_end(summary)`
/// 3. `on_match_end()` - once
///
/// Every method has a no-op default.
///
/// # Examples
///
/// ```
/// use morris::ports::{GameSummary, Observer};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(&mut self, summary: &GameSummary) -> morris::Result<()> {
///         if summary.outcome.winner().is_none() {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after a move was chosen, with the board as it was before the move.
    ///
    /// `player` is the name of the contender that chose the move.
    fn on_move(
        &mut self,
        _game_num: usize,
        _ply: usize,
        _board: &Board,
        _side: Side,
        _mv: Move,
        _player: &str,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _summary: &GameSummary) -> Result<()> {
        Ok(())
    }

    /// Last call of a match. Flush files or print summaries here.
    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}

fn lock<'a, T>(shared: &'a Arc<Mutex<T>>, event: &'static str) -> Result<MutexGuard<'a, T>> {
    shared.lock().map_err(|_| Error::ObserverPoisoned { event })
}

/// A shared observer, so the caller keeps a handle to read it after the pipeline
/// has consumed the boxed clone.
impl<T: Observer> Observer for Arc<Mutex<T>> {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        lock(self, "match start")?.on_match_start(total_games)
    }

    fn on_game_start(&mut self, game_num: usize) -> Result<()> {
        lock(self, "game start")?.on_game_start(game_num)
    }

    fn on_move(
        &mut self,
        game_num: usize,
        ply: usize,
        board: &Board,
        side: Side,
        mv: Move,
        player: &str,
    ) -> Result<()> {
        lock(self, "move")?.on_move(game_num, ply, board, side, mv, player)
    }

    fn on_game_end(&mut self, summary: &GameSummary) -> Result<()> {
        lock(self, "game end")?.on_game_end(summary)
    }

    fn on_match_end(&mut self) -> Result<()> {
        lock(self, "match end")?.on_match_end()
    }
}
