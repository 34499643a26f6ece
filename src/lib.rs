//! Three Men's Morris engine
//!
//! This crate provides:
//! - The 3x3 board with its 16-edge connectivity graph (4 diagonal spokes through
//!   the center), move generation and win tests
//! - A depth-limited minimax searcher with alpha-beta pruning
//! - A budgeted heuristic best-first searcher
//! - Game sessions with configurable win and blocked-side rules
//! - A match pipeline with observers, and a command-line front end
//!
//! # Example
//!
//! ```
//! use morris::{
//!     config::{Difficulty, SearchConfig, StrategyKind},
//!     game::{Board, Side},
//!     search::MinimaxSearcher,
//! };
//!
//! let board: Board = "ABBA...AB".parse().unwrap();
//! let easy = SearchConfig::new(StrategyKind::Minimax, Difficulty::Easy);
//! let report = MinimaxSearcher::new().search(&board, Side::A, &easy);
//! assert_eq!(report.best_move.unwrap().to_string(), "2,1-2,0");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod pipeline;
pub mod ports;
pub mod search;

pub use config::{Difficulty, MobilityModel, PlayerSpec, SearchConfig, StrategyKind};
pub use error::{Error, Result};
pub use game::{Board, GameOutcome, GameSession, Move, Position, Side};
pub use ports::SearchStrategy;
pub use search::{BestFirstSearcher, MinimaxSearcher, RandomStrategy, strategy_for};
