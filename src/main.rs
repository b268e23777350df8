use std::path::{Path, PathBuf};

use clap::Parser;

use combo_menu_planner::cli::{Cli, Command, PlanArgs};
use combo_menu_planner::config::PlanConfig;
use combo_menu_planner::error::Result;
use combo_menu_planner::interface::{confirm_overwrite, display_menu_plan};
use combo_menu_planner::observability::init_tracing;
use combo_menu_planner::planner::generate_seeded;
use combo_menu_planner::server::{AppState, serve};
use combo_menu_planner::store::{load_menu_checked, save_plan, write_plan_csv};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let command = cli.command.unwrap_or_default();

    match command {
        Command::Serve {
            host,
            port,
            static_dir,
        } => cmd_serve(&cli.file, &host, port, &static_dir).await,
        Command::Generate {
            plan,
            seed,
            out,
            csv,
            force,
        } => cmd_generate(&cli.file, &plan, seed, out, csv, force),
    }
}

/// Serve the plan endpoint with default plan settings.
async fn cmd_serve(menu_path: &Path, host: &str, port: u16, static_dir: &Path) -> Result<()> {
    if !menu_path.exists() {
        tracing::warn!(
            "Master menu not found at {}; requests will fail until it exists",
            menu_path.display()
        );
    }

    let state = AppState::new(menu_path, PlanConfig::default());
    serve(state, host, port, static_dir).await
}

/// Generate a plan, print it, and optionally save it.
fn cmd_generate(
    menu_path: &Path,
    args: &PlanArgs,
    seed: Option<u64>,
    out: Option<PathBuf>,
    csv: Option<PathBuf>,
    force: bool,
) -> Result<()> {
    let config = args.to_config();
    config.validate()?;

    let items = load_menu_checked(menu_path)?;
    println!("Loaded {} menu items", items.len());

    let plan = generate_seeded(&items, &config, seed)?;
    display_menu_plan(&plan, config.combos_per_day);

    if let Some(path) = out {
        if confirm_overwrite(&path, force)? {
            save_plan(&path, &plan)?;
            println!("Plan saved to {}", path.display());
        }
    }

    if let Some(path) = csv {
        if confirm_overwrite(&path, force)? {
            write_plan_csv(&path, &plan)?;
            println!("Plan exported to {}", path.display());
        }
    }

    Ok(())
}
