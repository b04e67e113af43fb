//! Wet freight CLI library.
//!
//! This crate provides the command handlers behind the `wetfreight-cli`
//! binary, plus terminal styling and output-format selection.

pub mod commands;
pub mod output;
pub mod terminal;
