use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::PlanConfig;
use crate::error::{PlannerError, Result};
use crate::models::{DailyMenu, MenuItem, MenuPlan};
use crate::planner::catalog::categorize_menu;
use crate::planner::constants::day_label;
use crate::planner::sampler::generate_daily_combos;
use crate::planner::tracker::UniquenessTracker;

/// Generate a multi-day plan with an injected random source.
///
/// The catalog is categorized once; a fresh tracker and id counter are
/// threaded through every day. Days that come up short are logged and kept.
pub fn generate_menu_plan<R: Rng + ?Sized>(
    master_menu: &[MenuItem],
    config: &PlanConfig,
    rng: &mut R,
) -> Result<MenuPlan> {
    if master_menu.is_empty() {
        return Err(PlannerError::EmptyCatalog);
    }
    config.validate()?;

    let menu = categorize_menu(master_menu);
    let mut tracker = UniquenessTracker::new(config.repeat_window_days);
    let mut combo_counter: u32 = 0;
    let mut plan = MenuPlan {
        days: Vec::with_capacity(config.num_days),
    };

    for day_index in 0..config.num_days {
        let day = day_label(day_index);
        tracing::info!("Generating menu for {} (Day {})", day, day_index + 1);

        let combos = generate_daily_combos(
            &menu,
            config,
            &mut tracker,
            day_index,
            &mut combo_counter,
            rng,
        );

        if combos.len() < config.combos_per_day {
            tracing::warn!(
                generated = combos.len(),
                requested = config.combos_per_day,
                "Generated fewer combos than requested for {}; constraints may be too strict for the available items",
                day
            );
        }

        plan.days.push(DailyMenu { day, combos });
    }

    tracing::info!(
        days = plan.days.len(),
        combos = plan.total_combos(),
        "Menu plan generated"
    );

    Ok(plan)
}

/// Generate a plan with a freshly seeded random source.
pub fn generate_menu_suggestions(master_menu: &[MenuItem], config: &PlanConfig) -> Result<MenuPlan> {
    let mut rng = StdRng::from_entropy();
    generate_menu_plan(master_menu, config, &mut rng)
}

/// Generate a plan from a seed, or from entropy when no seed is given.
pub fn generate_seeded(
    master_menu: &[MenuItem],
    config: &PlanConfig,
    seed: Option<u64>,
) -> Result<MenuPlan> {
    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_menu_plan(master_menu, config, &mut rng)
        }
        None => generate_menu_suggestions(master_menu, config),
    }
}
