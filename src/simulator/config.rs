//! Simulation configuration.

use crate::bean::BeanMode;
use crate::constants::{DEFAULT_BEAN_COUNT, DEFAULT_NUM_RUNS, DEFAULT_SLOT_COUNT};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of slots (and peg rows) on the board
    pub slot_count: usize,

    /// Beans dropped per run
    pub bean_count: usize,

    pub mode: BeanMode,

    /// Number of independent runs, each with its own RNG
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            bean_count: DEFAULT_BEAN_COUNT,
            mode: BeanMode::Luck,
            num_runs: DEFAULT_NUM_RUNS,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Luck-mode drop on the given board
    pub fn luck(slot_count: usize, bean_count: usize) -> Self {
        Self {
            slot_count,
            bean_count,
            mode: BeanMode::Luck,
            ..Default::default()
        }
    }

    /// Skill-mode drop on the given board
    pub fn skill(slot_count: usize, bean_count: usize) -> Self {
        Self {
            slot_count,
            bean_count,
            mode: BeanMode::Skill,
            ..Default::default()
        }
    }

    /// Large seeded luck run for checking the landing distribution
    pub fn distribution_check(seed: u64) -> Self {
        Self {
            bean_count: 2_000,
            num_runs: 10,
            seed: Some(seed),
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Total beans dropped across all runs.
    pub fn total_beans(&self) -> u64 {
        self.bean_count as u64 * self.num_runs as u64
    }
}
