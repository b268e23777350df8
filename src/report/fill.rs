use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::PlanConfig;
use crate::error::Result;
use crate::models::MenuItem;
use crate::planner::{combo_signature, day_label, generate_menu_plan};

/// Configuration for a fill-rate run.
#[derive(Debug, Clone)]
pub struct FillReportConfig {
    pub trials: usize,
    pub seed: u64,
    pub plan: PlanConfig,
}

impl Default for FillReportConfig {
    fn default() -> Self {
        Self {
            trials: 200,
            seed: 123,
            plan: PlanConfig::default(),
        }
    }
}

/// Aggregated outcome for one day index across all trials.
#[derive(Debug, Clone, PartialEq)]
pub struct DayFillStats {
    pub day: String,
    pub requested: usize,
    pub mean_combos: f64,
    pub min_combos: usize,
    pub max_combos: usize,
    /// Trials in which the day got every requested combo.
    pub full_days: usize,
    /// Trials in which the day got no combo at all.
    pub empty_days: usize,
}

impl DayFillStats {
    pub fn fill_rate(&self) -> f64 {
        if self.requested == 0 {
            return 1.0;
        }
        self.mean_combos / self.requested as f64
    }
}

#[derive(Debug, Clone)]
pub struct FillReport {
    pub trials: usize,
    pub per_day: Vec<DayFillStats>,
    /// Accepted combos over requested slots, across every trial.
    pub overall_fill_rate: f64,
    /// Distinct triples seen across every trial.
    pub distinct_combos: usize,
}

/// Run seeded plan generations and aggregate how well each day fills.
pub fn run_fill_report(config: &FillReportConfig, master_menu: &[MenuItem]) -> Result<FillReport> {
    config.plan.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let num_days = config.plan.num_days;
    let requested = config.plan.combos_per_day;

    let mut counts: Vec<Vec<usize>> = vec![Vec::with_capacity(config.trials); num_days];
    let mut signatures: HashSet<String> = HashSet::new();
    let mut accepted_total = 0usize;

    for trial in 0..config.trials {
        let plan = generate_menu_plan(master_menu, &config.plan, &mut rng)?;

        for (day_index, day) in plan.days.iter().enumerate() {
            counts[day_index].push(day.combos.len());
            accepted_total += day.combos.len();
            for combo in &day.combos {
                signatures.insert(combo_signature(&combo.main, &combo.side, &combo.drink));
            }
        }

        if (trial + 1) % (config.trials / 10).max(1) == 0 {
            tracing::debug!(trial = trial + 1, trials = config.trials, "Fill report progress");
        }
    }

    let per_day = counts
        .iter()
        .enumerate()
        .map(|(day_index, day_counts)| {
            let sum: usize = day_counts.iter().sum();
            DayFillStats {
                day: day_label(day_index),
                requested,
                mean_combos: if day_counts.is_empty() {
                    0.0
                } else {
                    sum as f64 / day_counts.len() as f64
                },
                min_combos: day_counts.iter().copied().min().unwrap_or(0),
                max_combos: day_counts.iter().copied().max().unwrap_or(0),
                full_days: day_counts.iter().filter(|&&c| c >= requested).count(),
                empty_days: day_counts.iter().filter(|&&c| c == 0).count(),
            }
        })
        .collect();

    let slots = config.trials * num_days * requested;
    let overall_fill_rate = if slots == 0 {
        1.0
    } else {
        accepted_total as f64 / slots as f64
    };

    Ok(FillReport {
        trials: config.trials,
        per_day,
        overall_fill_rate,
        distinct_combos: signatures.len(),
    })
}
