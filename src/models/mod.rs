pub mod item;
pub mod plan;

pub use item::{Category, MenuItem};
pub use plan::{Combo, DailyMenu, MenuPlan};
