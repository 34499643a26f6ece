//! Search strategy port - abstraction over the move-choosing algorithms
//!
//! Both tree searchers and the random baseline implement this trait, so game sessions,
//! the match pipeline and the CLI pick moves the same way whichever algorithm is
//! configured.

use crate::{
    config::SearchConfig,
    game::{Board, Move, Side},
};

/// A move-choosing algorithm.
///
/// Implementations are pure with respect to the board: the snapshot is borrowed, never
/// modified, and nothing about it is remembered between calls. `&mut self` exists for
/// strategies that carry a random number generator.
///
/// # Examples
///
/// ```
/// use morris::{
///     config::SearchConfig,
///     game::{Board, Side},
///     ports::SearchStrategy,
///     search::MinimaxSearcher,
/// };
///
/// let mut searcher = MinimaxSearcher::new();
/// let board = Board::start();
/// let mv = searcher.choose_move(&board, Side::A, &SearchConfig::default());
/// assert!(mv.is_some_and(|mv| board.is_legal_move(mv, Side::A)));
/// ```
pub trait SearchStrategy: Send {
    /// Choose a move for `side` on `board`.
    ///
    /// Returns `None` only when `side` has no legal move. Running out of search budget
    /// is not a failure: strategies fall back to a cheaper choice instead.
    fn choose_move(&mut self, board: &Board, side: Side, config: &SearchConfig)
    -> Option<Move>;

    /// Short name used in logs and match reports.
    fn name(&self) -> &str;

    /// Re-seed any internal random number generator.
    ///
    /// Match pipelines call this with the match seed so runs are reproducible.
    /// Deterministic strategies ignore it.
    fn reseed(&mut self, _seed: u64) {}
}
