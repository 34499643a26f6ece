//! Match pipeline abstractions
//!
//! This module provides:
//! - Repeated games between two contenders with side swapping and ply limits
//! - Observers recording progress, metrics and move logs during a match

pub mod matches;
pub mod observers;

pub use matches::{Contender, MatchConfig, MatchPipeline, MatchResult};
pub use observers::{
    JsonlObserver, MetricsObserver, MetricsSummary, MoveObservation, ProgressObserver,
};

pub use crate::ports::{GameSummary, Observer, SearchStrategy};
