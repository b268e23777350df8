use crate::models::MenuPlan;

/// Display a menu plan as a formatted table, one block per day.
pub fn display_menu_plan(plan: &MenuPlan, combos_requested: usize) {
    if plan.days.is_empty() {
        println!("No menu plan generated.");
        return;
    }

    let name_width = plan
        .combos()
        .flat_map(|c| c.item_names())
        .map(str::len)
        .max()
        .unwrap_or(10);

    for day in &plan.days {
        println!();
        println!(
            "=== {} ({}/{} combos) ===",
            day.day,
            day.combos.len(),
            combos_requested
        );

        if day.combos.is_empty() {
            println!("  (no combos met the constraints)");
            continue;
        }

        for combo in &day.combos {
            println!(
                "  {:<10} {:<w$} + {:<w$} + {:<w$} | {:>4} kcal | pop {:.2}",
                combo.id,
                combo.main,
                combo.side,
                combo.drink,
                combo.calories,
                combo.popularity,
                w = name_width
            );
            println!("             {}", combo.reasoning);
        }
    }

    let total = plan.total_combos();
    let requested = plan.days.len() * combos_requested;
    let short_days = plan
        .days
        .iter()
        .filter(|d| d.combos.len() < combos_requested)
        .count();

    println!();
    println!("--- Summary ---");
    println!("Days planned: {}", plan.days.len());
    println!("Combos: {} of {} requested", total, requested);
    if short_days > 0 {
        println!("Days short of combos: {}", short_days);
    }
    println!();
}
