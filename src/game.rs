//! Three Men's Morris rules: board, connectivity, move generation and sessions

pub mod board;
pub mod connectivity;
pub mod lines;
pub mod rules;
pub mod session;
pub mod symmetry;

pub use board::{BOARD_SIZE, Board, CELL_COUNT, Cell, Move, PIECES_PER_SIDE, Position, Side};
pub use connectivity::{ConnectivityGraph, are_connected, neighbors, neighbors_at};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use session::{
    BlockedPolicy, GameOutcome, GameSession, MoveRecord, Scoreboard, SessionRules, WinRule,
};
pub use symmetry::D4Transform;
