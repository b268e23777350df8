use std::path::PathBuf;

use clap::Parser;

use combo_menu_planner::cli::PlanArgs;
use combo_menu_planner::observability::init_tracing;
use combo_menu_planner::report::{FillReportConfig, print_report, run_fill_report, write_csv};
use combo_menu_planner::store::load_menu_checked;

#[derive(Parser, Debug)]
#[command(name = "fill_report")]
#[command(about = "Measure how often each planned day fills its combo slots")]
struct Args {
    /// Number of plans to generate
    #[arg(long, default_value = "200")]
    trials: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Path to the master menu
    #[arg(long, default_value = "data/master_menu.json")]
    menu: PathBuf,

    /// Output CSV file for per-day statistics
    #[arg(long, default_value = "fill_report.csv")]
    csv: PathBuf,

    #[command(flatten)]
    plan: PlanArgs,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing("warn") {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let items = match load_menu_checked(&args.menu) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("Error loading menu {:?}: {}", args.menu, e);
            std::process::exit(1);
        }
    };

    println!("Loaded {} menu items from {:?}", items.len(), args.menu);

    let config = FillReportConfig {
        trials: args.trials,
        seed: args.seed,
        plan: args.plan.to_config(),
    };

    println!(
        "Running {} trials: {} days x {} combos, {}-{} kcal, tolerance {:.2}",
        config.trials,
        config.plan.num_days,
        config.plan.combos_per_day,
        config.plan.min_calories,
        config.plan.max_calories,
        config.plan.popularity_tolerance
    );

    let report = match run_fill_report(&config, &items) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_report(&report);

    if let Err(e) = write_csv(&report, &args.csv) {
        eprintln!("Error writing CSV: {}", e);
    } else {
        println!("Wrote per-day statistics to {:?}", args.csv);
    }
}
