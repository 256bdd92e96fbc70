//! Simulation configuration.

/// Configuration for a balance simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Battles to play per class pairing
    pub runs_per_matchup: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Rounds per battle before it is scored as a stalemate
    pub max_rounds: u32,

    /// Log verbosity (0 = report only, 1 = banner and report, 2 = per-battle detail)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs_per_matchup: 1000,
            seed: None,
            max_rounds: 200,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for smoke-testing the balance numbers
    pub fn quick_check() -> Self {
        Self {
            runs_per_matchup: 100,
            ..Default::default()
        }
    }

    /// Reproducible config for comparing balance across changes
    pub fn seeded(seed: u64, runs_per_matchup: u32) -> Self {
        Self {
            runs_per_matchup,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }
}
