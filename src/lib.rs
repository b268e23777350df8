#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod observability;
pub mod planner;
pub mod report;
pub mod server;
pub mod store;

pub use config::PlanConfig;
pub use error::{PlannerError, Result};
pub use models::{Category, Combo, DailyMenu, MenuItem, MenuPlan};
