//! Ports (trait boundaries) between the engine and its drivers.
//!
//! The search code and the match pipeline only see these traits; concrete searchers
//! and observers are plugged in from the outside.

pub mod observer;
pub mod strategy;

pub use observer::{GameSummary, Observer};
pub use strategy::SearchStrategy;
