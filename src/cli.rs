use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::PlanConfig;
use crate::planner::constants::*;

/// Combo Menu Planner: builds a weekly menu of balanced main/side/drink combos.
#[derive(Parser, Debug)]
#[command(name = "combo_menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the master menu (JSON, or CSV with a .csv extension).
    #[arg(short, long, global = true, default_value = "data/master_menu.json")]
    pub file: PathBuf,

    /// Log level filter when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Plan shape and constraint overrides shared by commands.
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Number of days to plan.
    #[arg(long, default_value_t = DEFAULT_NUM_DAYS)]
    pub days: usize,

    /// Combo slots per day.
    #[arg(long, default_value_t = DEFAULT_COMBOS_PER_DAY)]
    pub combos: usize,

    /// Minimum calories per combo (inclusive).
    #[arg(long, default_value_t = DEFAULT_MIN_CALORIES)]
    pub min_calories: u32,

    /// Maximum calories per combo (inclusive).
    #[arg(long, default_value_t = DEFAULT_MAX_CALORIES)]
    pub max_calories: u32,

    /// Maximum popularity spread within a combo.
    #[arg(long, default_value_t = DEFAULT_POPULARITY_TOLERANCE)]
    pub tolerance: f64,
}

impl Default for PlanArgs {
    fn default() -> Self {
        Self {
            days: DEFAULT_NUM_DAYS,
            combos: DEFAULT_COMBOS_PER_DAY,
            min_calories: DEFAULT_MIN_CALORIES,
            max_calories: DEFAULT_MAX_CALORIES,
            tolerance: DEFAULT_POPULARITY_TOLERANCE,
        }
    }
}

impl PlanArgs {
    pub fn to_config(&self) -> PlanConfig {
        PlanConfig {
            popularity_tolerance: self.tolerance,
            ..PlanConfig::new(self.days, self.combos, self.min_calories, self.max_calories)
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the plan API and the static page.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind.
        #[arg(long, default_value_t = 8080)]
        port: u16,

        /// Directory holding the static front page.
        #[arg(long, default_value = "frontend")]
        static_dir: PathBuf,
    },

    /// Generate a plan and print it to the terminal.
    Generate {
        #[command(flatten)]
        plan: PlanArgs,

        /// Seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the plan as JSON to this path.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the plan as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Overwrite output files without asking.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("frontend"),
        }
    }
}
