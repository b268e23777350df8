use serde::{Deserialize, Serialize};

/// An accepted main/side/drink combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    #[serde(rename = "combo_id")]
    pub id: String,

    pub main: String,

    pub side: String,

    pub drink: String,

    #[serde(rename = "calorie_count")]
    pub calories: u32,

    /// Mean popularity of the three items, rounded to 2 decimals.
    #[serde(rename = "popularity_score")]
    pub popularity: f64,

    pub reasoning: String,
}

impl Combo {
    /// Names of the three items in main, side, drink order.
    pub fn item_names(&self) -> [&str; 3] {
        [self.main.as_str(), self.side.as_str(), self.drink.as_str()]
    }
}

/// Combos generated for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyMenu {
    pub day: String,
    pub combos: Vec<Combo>,
}

/// The full multi-day plan, one entry per day in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuPlan {
    #[serde(rename = "menu_plan")]
    pub days: Vec<DailyMenu>,
}

impl MenuPlan {
    /// All combos across every day, in acceptance order.
    pub fn combos(&self) -> impl Iterator<Item = &Combo> {
        self.days.iter().flat_map(|d| d.combos.iter())
    }

    pub fn total_combos(&self) -> usize {
        self.days.iter().map(|d| d.combos.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_combos() == 0
    }
}
