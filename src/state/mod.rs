mod favorites;
mod goals;
mod history;
mod insights;
mod persistence;

pub use favorites::{FavoriteMeal, Favorites};
pub use goals::{
    days_remaining, progress_percent, Goal, GoalBook, GoalKind, NewGoal, DERIVED_GOAL_DAYS,
    DERIVED_WEIGHT_DELTA,
};
pub use history::{PlanHistory, SavedPlan};
pub use insights::{motivational_message, AchievementLevel, Insights};
pub use persistence::{load_or_default, save_json};
