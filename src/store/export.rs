use std::path::Path;

use crate::error::Result;
use crate::models::MenuPlan;

/// Write a plan as CSV, one row per combo.
pub fn write_plan_csv<P: AsRef<Path>>(path: P, plan: &MenuPlan) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "day",
        "combo_id",
        "main",
        "side",
        "drink",
        "calorie_count",
        "popularity_score",
        "reasoning",
    ])?;

    for day in &plan.days {
        for combo in &day.combos {
            wtr.write_record([
                day.day.clone(),
                combo.id.clone(),
                combo.main.clone(),
                combo.side.clone(),
                combo.drink.clone(),
                combo.calories.to_string(),
                format!("{:.2}", combo.popularity),
                combo.reasoning.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
