//! Observer implementations for match pipelines
//!
//! Observers allow composable data collection during matches without coupling the
//! game loop to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    game::{Board, Move, Side},
    ports::{GameSummary, Observer},
};

/// Progress bar observer - Shows match progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    first_wins: usize,
    second_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
        }
    }

    fn message(&self) -> String {
        format!("{} L:{} D:{}", self.first_wins, self.second_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (W:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, summary: &GameSummary) -> Result<()> {
        if summary.first_contender_won() {
            self.first_wins += 1;
        } else if summary.second_contender_won() {
            self.second_wins += 1;
        } else {
            self.draws += 1;
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(summary.game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Running tallies of a match, including how games ended and where they were won
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    pub truncated: usize,
    /// Wins by the side that moved first (A)
    pub a_wins: usize,
    pub b_wins: usize,
    pub avg_game_length: f64,
    pub shortest_game: Option<usize>,
    pub longest_game: Option<usize>,
    /// Share of moves that used one of the diagonal spokes
    pub diagonal_move_rate: f64,
}

/// Metrics observer - Tracks match metrics
#[derive(Debug, Default)]
pub struct MetricsObserver {
    games: Vec<GameSummary>,
    moves: usize,
    diagonal_moves: usize,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get average game length in plies
    pub fn avg_game_length(&self) -> f64 {
        if self.games.is_empty() {
            0.0
        } else {
            self.games.iter().map(|g| g.plies).sum::<usize>() as f64 / self.games.len() as f64
        }
    }

    fn count(&self, pred: impl Fn(&GameSummary) -> bool) -> usize {
        self.games.iter().filter(|g| pred(g)).count()
    }

    /// Get metrics summary
    pub fn summary(&self) -> MetricsSummary {
        let first_wins = self.count(GameSummary::first_contender_won);
        let second_wins = self.count(GameSummary::second_contender_won);

        MetricsSummary {
            total_games: self.games.len(),
            first_wins,
            second_wins,
            draws: self.games.len() - first_wins - second_wins,
            truncated: self.count(|g| g.truncated),
            a_wins: self.count(|g| g.outcome.winner() == Some(Side::A)),
            b_wins: self.count(|g| g.outcome.winner() == Some(Side::B)),
            avg_game_length: self.avg_game_length(),
            shortest_game: self.games.iter().map(|g| g.plies).min(),
            longest_game: self.games.iter().map(|g| g.plies).max(),
            diagonal_move_rate: if self.moves == 0 {
                0.0
            } else {
                self.diagonal_moves as f64 / self.moves as f64
            },
        }
    }
}

impl Observer for MetricsObserver {
    fn on_move(
        &mut self,
        _game_num: usize,
        _ply: usize,
        _board: &Board,
        _side: Side,
        mv: Move,
        _player: &str,
    ) -> Result<()> {
        self.moves += 1;
        if mv.is_diagonal() {
            self.diagonal_moves += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, summary: &GameSummary) -> Result<()> {
        self.games.push(summary.clone());
        Ok(())
    }
}

/// One line of a JSONL move log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveObservation {
    pub game_num: usize,
    pub ply: usize,
    pub side: Side,
    /// Name of the contender that chose the move
    pub player: String,
    /// Board before the move, row-major text
    pub board: String,
    #[serde(rename = "move")]
    pub mv: String,
    /// Final outcome of the game this move belongs to
    pub outcome: String,
}

/// JSONL observer - Writes every move of every game as one JSON object per line.
///
/// Moves are buffered per game so each line can carry the game's outcome.
pub struct JsonlObserver {
    writer: BufWriter<File>,
    pending: Vec<MoveObservation>,
}

impl JsonlObserver {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| crate::Error::Io {
            operation: format!("create move log {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
            pending: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.pending.clear();
        Ok(())
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
        self.pending.push(MoveObservation {
            game_num,
            ply,
            side,
            player: player.to_string(),
            board: board.encode(),
            mv: mv.to_string(),
            outcome: String::new(),
        });
        Ok(())
    }

    fn on_game_end(&mut self, summary: &GameSummary) -> Result<()> {
        let outcome = summary.outcome.to_string();
        for mut observation in self.pending.drain(..) {
            observation.outcome.clone_from(&outcome);
            serde_json::to_writer(&mut self.writer, &observation)?;
            writeln!(&mut self.writer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
