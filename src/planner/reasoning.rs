use std::collections::BTreeSet;

use crate::models::MenuItem;
use crate::planner::constants::TASTE_PRIORITY;

/// Describe the taste mix of a combo.
///
/// A single shared profile is named directly; otherwise the highest-priority
/// recognized profile present leads a "mixed" description.
pub fn taste_description(main: &MenuItem, side: &MenuItem, drink: &MenuItem) -> String {
    let profiles: BTreeSet<&str> = [
        main.taste_profile.as_str(),
        side.taste_profile.as_str(),
        drink.taste_profile.as_str(),
    ]
    .into_iter()
    .collect();

    if profiles.len() == 1 {
        if let Some(profile) = profiles.first() {
            return format!("a {} profile", profile);
        }
    }

    match TASTE_PRIORITY.iter().find(|p| profiles.contains(*p)) {
        Some(profile) => format!("a {} and mixed taste profile", profile),
        None => "a mixed taste profile".to_string(),
    }
}

/// Human-readable explanation attached to an accepted combo.
pub fn generate_reasoning(
    main: &MenuItem,
    side: &MenuItem,
    drink: &MenuItem,
    total_calories: u32,
    avg_popularity: f64,
) -> String {
    format!(
        "This combo features {}, consists of popular choices (average popularity: {:.2}), and meets the calorie target ({} kcal).",
        taste_description(main, side, drink),
        avg_popularity,
        total_calories
    )
}
