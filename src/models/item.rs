use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The slot a menu item fills in a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Main,
    Side,
    Drink,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Main, Category::Side, Category::Drink];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Side => "side",
            Category::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(Category::Main),
            "side" => Ok(Category::Side),
            "drink" => Ok(Category::Drink),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A single entry of the master menu.
///
/// The category is kept as the raw string from the catalog so that entries
/// with an unrecognized role survive loading; they are reported and skipped
/// when the menu is categorized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "item_name")]
    pub name: String,

    #[serde(rename = "category")]
    pub category: String,

    #[serde(rename = "calories")]
    pub calories: u32,

    #[serde(rename = "taste_profile")]
    pub taste_profile: String,

    #[serde(rename = "popularity_score")]
    pub popularity: f64,
}

impl MenuItem {
    pub fn new(
        name: &str,
        category: Category,
        calories: u32,
        taste_profile: &str,
        popularity: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            category: category.as_str().to_string(),
            calories,
            taste_profile: taste_profile.to_string(),
            popularity,
        }
    }

    /// Parsed role, or `None` for categories outside main/side/drink.
    pub fn role(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    /// Popularity must be a finite, non-negative number.
    pub fn is_valid(&self) -> bool {
        self.popularity.is_finite() && self.popularity >= 0.0 && !self.name.trim().is_empty()
    }

    /// Canonical key for deduplication: role plus lowercase name.
    pub fn key(&self) -> (String, String) {
        (self.category.trim().to_lowercase(), self.name.to_lowercase())
    }
}
