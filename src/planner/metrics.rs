use crate::models::MenuItem;

/// Aggregate numbers for a candidate combo.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboMetrics {
    /// Summed in `u64` so three large items cannot wrap.
    pub total_calories: u64,
    /// Unrounded mean popularity.
    pub avg_popularity: f64,
}

/// Round to 2 decimal places, halves away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total calories and mean popularity of a main/side/drink triple.
pub fn calculate_combo_metrics(main: &MenuItem, side: &MenuItem, drink: &MenuItem) -> ComboMetrics {
    let total_calories =
        u64::from(main.calories) + u64::from(side.calories) + u64::from(drink.calories);
    let avg_popularity = (main.popularity + side.popularity + drink.popularity) / 3.0;

    ComboMetrics {
        total_calories,
        avg_popularity,
    }
}

/// Difference between the most and least popular item.
pub fn popularity_spread(main: &MenuItem, side: &MenuItem, drink: &MenuItem) -> f64 {
    let scores = [main.popularity, side.popularity, drink.popularity];
    let max = scores.into_iter().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.into_iter().fold(f64::INFINITY, f64::min);
    max - min
}

/// Check a triple against the calorie band and the popularity tolerance.
///
/// Both calorie bounds are inclusive.
pub fn is_valid_combo(
    main: &MenuItem,
    side: &MenuItem,
    drink: &MenuItem,
    min_calories: u32,
    max_calories: u32,
    popularity_tolerance: f64,
) -> bool {
    let metrics = calculate_combo_metrics(main, side, drink);

    if !(u64::from(min_calories)..=u64::from(max_calories)).contains(&metrics.total_calories) {
        return false;
    }

    popularity_spread(main, side, drink) <= popularity_tolerance
}
