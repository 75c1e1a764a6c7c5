//! Simulation runner: one machine per run, each driven by its own seeded RNG.

use super::config::SimConfig;
use super::report::SimReport;
use crate::bean::BeanError;
use crate::machine::Machine;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Per-run results.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Landed beans per slot
    pub slot_counts: Vec<u64>,
    /// Beans per skill level
    pub skill_counts: Vec<u64>,
    /// Machine steps until the board emptied
    pub steps: u64,
    pub average_slot: f64,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, BeanError> {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng)?;

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                runs = config.num_runs,
                steps = run_stats.steps,
                average_slot = run_stats.average_slot,
                "run complete"
            );
        }
        all_runs.push(run_stats);
    }

    Ok(SimReport::from_runs(config, all_runs))
}

/// Drop `config.bean_count` fresh beans through one machine.
pub fn simulate_single_run(
    config: &SimConfig,
    rng: &mut ChaCha8Rng,
) -> Result<RunStats, BeanError> {
    let mut machine = Machine::new(config.slot_count)?;
    machine.load(config.bean_count, config.mode, rng)?;
    let steps = machine.run_to_completion(rng)?;

    let mut skill_counts = vec![0u64; config.slot_count];
    for (_, bean) in machine.landed_beans() {
        skill_counts[bean.skill_level()] += 1;
    }

    let stats = RunStats {
        slot_counts: machine.slot_counts().into_iter().map(|c| c as u64).collect(),
        skill_counts,
        steps,
        average_slot: machine.average_slot_bean_count(),
    };
    debug!(steps, landed = machine.landed_bean_count(), "machine emptied");
    Ok(stats)
}
