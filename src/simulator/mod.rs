//! Class balance simulator for Monte Carlo analysis.
//!
//! Plays thousands of randomized battles per class pairing to analyze:
//! - Win rates per class and per matchup
//! - First-mover advantage
//! - Battle length and stalemate frequency
//!
//! The simulator drives `Battle` (src/core/battle.rs) through the same
//! submit path the interactive game uses, so simulation results match
//! real gameplay behavior.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{ClassTotals, MatchupStats, SimReport};
pub use runner::{run_matchup, run_simulation, RandomPolicy};
