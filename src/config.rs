use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::planner::constants::*;

/// Settings for one plan-generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    pub num_days: usize,
    pub combos_per_day: usize,
    pub min_calories: u32,
    pub max_calories: u32,
    pub popularity_tolerance: f64,
    pub max_attempts_per_combo: usize,
    /// Minimum day gap before an identical triple may be reused.
    pub repeat_window_days: usize,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            num_days: DEFAULT_NUM_DAYS,
            combos_per_day: DEFAULT_COMBOS_PER_DAY,
            min_calories: DEFAULT_MIN_CALORIES,
            max_calories: DEFAULT_MAX_CALORIES,
            popularity_tolerance: DEFAULT_POPULARITY_TOLERANCE,
            max_attempts_per_combo: MAX_ATTEMPTS_PER_COMBO,
            repeat_window_days: REPEAT_WINDOW_DAYS,
        }
    }
}

impl PlanConfig {
    /// Default settings with a custom shape and calorie band.
    pub fn new(num_days: usize, combos_per_day: usize, min_calories: u32, max_calories: u32) -> Self {
        Self {
            num_days,
            combos_per_day,
            min_calories,
            max_calories,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_days > MAX_NUM_DAYS {
            return Err(PlannerError::InvalidConfig(format!(
                "days must be at most {}, got {}",
                MAX_NUM_DAYS, self.num_days
            )));
        }

        if self.combos_per_day > MAX_COMBOS_PER_DAY {
            return Err(PlannerError::InvalidConfig(format!(
                "combos per day must be at most {}, got {}",
                MAX_COMBOS_PER_DAY, self.combos_per_day
            )));
        }

        if self.min_calories > self.max_calories {
            return Err(PlannerError::InvalidConfig(format!(
                "min calories ({}) exceeds max calories ({})",
                self.min_calories, self.max_calories
            )));
        }

        if !self.popularity_tolerance.is_finite() || self.popularity_tolerance < 0.0 {
            return Err(PlannerError::InvalidConfig(format!(
                "popularity tolerance must be a non-negative number, got {}",
                self.popularity_tolerance
            )));
        }

        if self.max_attempts_per_combo == 0 {
            return Err(PlannerError::InvalidConfig(
                "max attempts per combo must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
