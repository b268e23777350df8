pub mod catalog;
pub mod constants;
pub mod metrics;
pub mod reasoning;
pub mod sampler;
pub mod tracker;
pub mod week;

pub use catalog::{CategorizedMenu, categorize_menu, suggest_category};
pub use constants::*;
pub use metrics::{ComboMetrics, calculate_combo_metrics, is_valid_combo, popularity_spread, round2};
pub use reasoning::{generate_reasoning, taste_description};
pub use sampler::generate_daily_combos;
pub use tracker::{UniquenessTracker, combo_signature};
pub use week::{generate_menu_plan, generate_menu_suggestions, generate_seeded};
