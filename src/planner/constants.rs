/// Number of days in a default plan.
pub const DEFAULT_NUM_DAYS: usize = 7;

/// Combo slots requested per day.
pub const DEFAULT_COMBOS_PER_DAY: usize = 3;

/// Calorie band a combo must fall within (inclusive).
pub const DEFAULT_MIN_CALORIES: u32 = 550;
pub const DEFAULT_MAX_CALORIES: u32 = 800;

/// Maximum allowed spread between the most and least popular item in a combo.
pub const DEFAULT_POPULARITY_TOLERANCE: f64 = 0.15;

// ─────────────────────────────────────────────────────────────────────────────
// Sampler bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Largest plan shape a single run accepts.
pub const MAX_NUM_DAYS: usize = 28;
pub const MAX_COMBOS_PER_DAY: usize = 10;

/// Random draws allowed per slot before the day is cut short.
pub const MAX_ATTEMPTS_PER_COMBO: usize = 5000;

/// An identical triple may not reappear until this many days have passed.
pub const REPEAT_WINDOW_DAYS: usize = 3;

/// Prefix for generated combo identifiers (`combo_1`, `combo_2`, ...).
pub const COMBO_ID_PREFIX: &str = "combo_";

/// Separator used when joining item names into a combo signature.
pub const SIGNATURE_SEPARATOR: &str = "_";

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Taste profiles named in the reasoning of a mixed combo, highest priority first.
pub const TASTE_PRIORITY: [&str; 4] = ["spicy", "sweet", "savory", "fresh"];

/// Calendar label for a day index. Days past the first week carry a week suffix.
pub fn day_label(day_index: usize) -> String {
    let name = DAY_NAMES[day_index % DAY_NAMES.len()];
    let week = day_index / DAY_NAMES.len();
    if week == 0 {
        name.to_string()
    } else {
        format!("{} (Week {})", name, week + 1)
    }
}
