pub mod prompts;
pub mod render;

pub use prompts::{confirm_overwrite, prompt_yes_no};
pub use render::display_menu_plan;
