use rand::Rng;

use crate::config::PlanConfig;
use crate::models::{Combo, MenuItem};
use crate::planner::catalog::CategorizedMenu;
use crate::planner::constants::COMBO_ID_PREFIX;
use crate::planner::metrics::{calculate_combo_metrics, is_valid_combo, round2};
use crate::planner::reasoning::generate_reasoning;
use crate::planner::tracker::UniquenessTracker;

/// Uniform draw from a non-empty pool.
fn draw<'a, R: Rng + ?Sized>(pool: &[&'a MenuItem], rng: &mut R) -> &'a MenuItem {
    pool[rng.gen_range(0..pool.len())]
}

/// Build an accepted combo and advance the shared id counter.
fn accept_combo(
    main: &MenuItem,
    side: &MenuItem,
    drink: &MenuItem,
    combo_counter: &mut u32,
) -> Combo {
    let metrics = calculate_combo_metrics(main, side, drink);
    // Accepted totals sit inside a u32 calorie band.
    let calories = u32::try_from(metrics.total_calories).unwrap_or(u32::MAX);
    *combo_counter += 1;

    Combo {
        id: format!("{}{}", COMBO_ID_PREFIX, *combo_counter),
        main: main.name.clone(),
        side: side.name.clone(),
        drink: drink.name.clone(),
        calories,
        popularity: round2(metrics.avg_popularity),
        reasoning: generate_reasoning(
            main,
            side,
            drink,
            calories,
            metrics.avg_popularity,
        ),
    }
}

/// Generate the combos for one day by rejection sampling.
///
/// Each slot gets up to `config.max_attempts_per_combo` random draws. The first
/// slot that exhausts its attempts ends the day early; combos accepted before
/// it are kept. Returns an empty list without consuming ids when any role has
/// no items.
pub fn generate_daily_combos<R: Rng + ?Sized>(
    menu: &CategorizedMenu<'_>,
    config: &PlanConfig,
    tracker: &mut UniquenessTracker,
    day_index: usize,
    combo_counter: &mut u32,
    rng: &mut R,
) -> Vec<Combo> {
    let missing = menu.missing_roles();
    if !missing.is_empty() {
        let roles: Vec<&str> = missing.iter().map(|c| c.as_str()).collect();
        tracing::error!(
            day = day_index + 1,
            missing = %roles.join(", "),
            "Not enough items in all categories to form combos"
        );
        return Vec::new();
    }

    tracker.start_day();
    let mut daily_combos = Vec::new();

    for slot in 0..config.combos_per_day {
        let mut accepted = None;

        for _ in 0..config.max_attempts_per_combo {
            let main = draw(&menu.mains, rng);
            let side = draw(&menu.sides, rng);
            let drink = draw(&menu.drinks, rng);

            if tracker.is_available(main, side, drink, day_index)
                && is_valid_combo(
                    main,
                    side,
                    drink,
                    config.min_calories,
                    config.max_calories,
                    config.popularity_tolerance,
                )
            {
                accepted = Some((main, side, drink));
                break;
            }
        }

        let Some((main, side, drink)) = accepted else {
            tracing::warn!(
                slot = slot + 1,
                day = day_index + 1,
                attempts = config.max_attempts_per_combo,
                "Could not find a unique and valid combo; menu may lack unique items or constraints are too strict"
            );
            break;
        };

        let combo = accept_combo(main, side, drink, combo_counter);
        tracing::debug!(id = %combo.id, day = day_index + 1, "Accepted combo");
        daily_combos.push(combo);
        tracker.reserve(main, side, drink, day_index);
    }

    daily_combos
}
