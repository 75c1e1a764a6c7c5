//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::bean::BeanMode;
use serde::Serialize;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub slot_count: usize,
    pub bean_count: usize,
    pub mode: BeanMode,
    pub num_runs: u32,

    // Histograms summed over runs
    pub slot_totals: Vec<u64>,
    pub skill_totals: Vec<u64>,

    // Aggregated stats
    pub avg_beans_per_slot: Vec<f64>,
    pub mean_slot: f64,
    pub slot_variance: f64,
    pub avg_steps: f64,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let mut slot_totals = vec![0u64; config.slot_count];
        let mut skill_totals = vec![0u64; config.slot_count];

        for run in &runs {
            for (total, count) in slot_totals.iter_mut().zip(&run.slot_counts) {
                *total += count;
            }
            for (total, count) in skill_totals.iter_mut().zip(&run.skill_counts) {
                *total += count;
            }
        }

        let avg_beans_per_slot = slot_totals
            .iter()
            .map(|&t| t as f64 / num_runs.max(1) as f64)
            .collect();

        let landed: u64 = slot_totals.iter().sum();
        let (mean_slot, slot_variance) = if landed == 0 {
            (0.0, 0.0)
        } else {
            let n = landed as f64;
            let mean = slot_totals
                .iter()
                .enumerate()
                .map(|(slot, &c)| slot as f64 * c as f64)
                .sum::<f64>()
                / n;
            let variance = slot_totals
                .iter()
                .enumerate()
                .map(|(slot, &c)| (slot as f64 - mean).powi(2) * c as f64)
                .sum::<f64>()
                / n;
            (mean, variance)
        };

        let avg_steps =
            runs.iter().map(|r| r.steps as f64).sum::<f64>() / num_runs.max(1) as f64;

        Self {
            slot_count: config.slot_count,
            bean_count: config.bean_count,
            mode: config.mode,
            num_runs,
            slot_totals,
            skill_totals,
            avg_beans_per_slot,
            mean_slot,
            slot_variance,
            avg_steps,
            run_stats: runs,
        }
    }

    pub fn total_landed(&self) -> u64 {
        self.slot_totals.iter().sum()
    }

    /// Landed share per slot, in `[0, 1]`.
    pub fn slot_fractions(&self) -> Vec<f64> {
        let landed = self.total_landed();
        if landed == 0 {
            return vec![0.0; self.slot_totals.len()];
        }
        self.slot_totals
            .iter()
            .map(|&c| c as f64 / landed as f64)
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One-line summary for quiet mode.
    pub fn summary_line(&self) -> String {
        format!(
            "{} slots, {} beans x {} runs ({}): mean slot {:.3}, variance {:.3}",
            self.slot_count,
            self.bean_count,
            self.num_runs,
            self.mode,
            self.mean_slot,
            self.slot_variance
        )
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                     BEAN MACHINE REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Board: {} slots, mode {}\n",
            self.slot_count, self.mode
        ));
        report.push_str(&format!(
            "Runs:  {} x {} beans ({} landed)\n\n",
            self.num_runs,
            self.bean_count,
            self.total_landed()
        ));

        report.push_str("── SLOTS ────────────────────────────────────────────────────────\n");
        let fractions = self.slot_fractions();
        let peak = fractions.iter().copied().fold(0.0, f64::max);
        for (slot, (&total, &pct)) in self.slot_totals.iter().zip(&fractions).enumerate() {
            let bar_len = if peak > 0.0 {
                (pct / peak * 40.0).round() as usize
            } else {
                0
            };
            report.push_str(&format!(
                "  {:3}: {:>8} {:>6.2}% {}\n",
                slot,
                total,
                pct * 100.0,
                "█".repeat(bar_len)
            ));
        }
        report.push('\n');

        report.push_str("── STATISTICS ───────────────────────────────────────────────────\n");
        report.push_str(&format!("  Mean Slot:      {:.3}\n", self.mean_slot));
        report.push_str(&format!("  Slot Variance:  {:.3}\n", self.slot_variance));
        report.push_str(&format!("  Avg Steps/Run:  {:.1}\n", self.avg_steps));

        if self.mode == BeanMode::Skill {
            report.push('\n');
            report.push_str("── SKILL LEVELS ─────────────────────────────────────────────────\n");
            for (level, &count) in self.skill_totals.iter().enumerate() {
                if count > 0 {
                    report.push_str(&format!("  {:3}: {:>8}\n", level, count));
                }
            }
        }

        report
    }
}
