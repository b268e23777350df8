mod export;
mod persistence;

pub use export::write_plan_csv;
pub use persistence::{load_menu, load_menu_checked, save_plan};
