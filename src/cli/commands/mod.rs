//! CLI commands

pub mod best_move;
pub mod moves;
pub mod play;
pub mod play_match;
