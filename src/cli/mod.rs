//! CLI infrastructure for the morris engine
//!
//! This module provides the command-line interface for inspecting positions, asking
//! the searchers for a move, running matches between strategies and playing a game.

pub mod commands;
pub mod config;
pub mod output;
