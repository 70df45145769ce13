pub mod prompts;
pub mod render;
pub mod session;

pub use prompts::{find_group_by_name, prompt_yes_no, MenuChoice};
pub use render::{display_composition, display_record, format_group_line, format_ingredient_line};
pub use session::{edit_session, SessionOutcome};
