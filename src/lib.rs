//! Work-in-progress checkpoints for git
//!
//! `git wip` records every change to tracked files in a throwaway commit
//! whose message is exactly `wip`. `git unwip` resets HEAD back past the run
//! of such commits at the tip of history, to the last real commit.

pub mod areas;
pub mod artifacts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
