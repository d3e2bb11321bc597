pub mod export;
pub mod prompts;
pub mod render;

pub use export::{render_plan_text, write_history_csv, write_plan_text};
pub use prompts::{collect_user_input, prompt_dietary_preference, suggest_diet_tag};
pub use render::{
    display_catalog, display_favorites, display_goals, display_history, display_insights,
    display_meal_plan,
};
